//! Tracked entities and the reference catalog

use serde::{Deserialize, Serialize};
use std::fmt;

/// Feed sources configured for financial entities
pub const FINANCIAL_SOURCES: &[&str] = &[
    "Yahoo Finance",
    "Reuters Business",
    "MarketWatch",
    "Financial Times",
];

/// Feed sources configured for SaaS entities
pub const SAAS_SOURCES: &[&str] = &["TechCrunch", "The Verge", "Hacker News", "VentureBeat"];

/// Sector an entity is tracked under
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sector {
    /// Listed stocks followed through financial news
    Financial,
    /// Software-as-a-service companies followed through tech news
    Saas,
}

impl Sector {
    /// Feed sources configured for this sector
    pub fn default_sources(self) -> &'static [&'static str] {
        match self {
            Self::Financial => FINANCIAL_SOURCES,
            Self::Saas => SAAS_SOURCES,
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Financial => write!(f, "financial"),
            Self::Saas => write!(f, "saas"),
        }
    }
}

/// A tracked company or stock
///
/// Reference data: built once when the catalog is loaded and never mutated
/// during an analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    /// Ticker symbol, the stable identifier
    pub symbol: String,
    /// Display name
    pub name: String,
    /// Sector tag
    pub sector: Sector,
    /// Lower-case alternative names used to spot mentions in text
    #[serde(default)]
    pub aliases: Vec<String>,
    /// Names of the feed sources configured for this entity
    #[serde(default)]
    pub sources: Vec<String>,
}

impl Entity {
    /// Create an entity with the default sources of its sector
    pub fn new(symbol: impl Into<String>, name: impl Into<String>, sector: Sector) -> Self {
        Self {
            symbol: symbol.into(),
            name: name.into(),
            sector,
            aliases: Vec::new(),
            sources: sector.default_sources().iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Add lower-cased aliases
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.aliases
            .extend(aliases.into_iter().map(|a| a.as_ref().to_lowercase()));
        self
    }

    /// Replace the configured feed sources
    pub fn with_sources<I, S>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sources = sources.into_iter().map(Into::into).collect();
        self
    }

    /// Whether a headline or summary mentions this entity
    ///
    /// Matches the lower-cased symbol or any alias as a substring of either text.
    pub fn mentions(&self, title: &str, summary: &str) -> bool {
        let title = title.to_lowercase();
        let summary = summary.to_lowercase();
        std::iter::once(self.symbol.to_lowercase())
            .chain(self.aliases.iter().cloned())
            .filter(|variant| !variant.is_empty())
            .any(|variant| title.contains(&variant) || summary.contains(&variant))
    }
}

/// Immutable set of tracked entities
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityCatalog {
    entities: Vec<Entity>,
}

impl EntityCatalog {
    /// Build a catalog from a list of entities
    pub fn new(entities: Vec<Entity>) -> Self {
        Self { entities }
    }

    /// The twenty entities tracked by default: ten listed stocks and ten SaaS companies
    pub fn default_catalog() -> Self {
        use Sector::{Financial, Saas};

        let entities = vec![
            // US tech giants
            Entity::new("AAPL", "Apple", Financial).with_aliases(["apple", "iphone", "tim cook"]),
            Entity::new("MSFT", "Microsoft", Financial)
                .with_aliases(["microsoft", "windows", "satya nadella"]),
            Entity::new("GOOGL", "Alphabet", Financial)
                .with_aliases(["google", "alphabet", "android"]),
            Entity::new("NVDA", "Nvidia", Financial)
                .with_aliases(["nvidia", "jensen huang", "gpu"]),
            // US financials
            Entity::new("JPM", "JPMorgan Chase", Financial)
                .with_aliases(["jpmorgan", "jp morgan", "jamie dimon"]),
            Entity::new("BAC", "Bank of America", Financial)
                .with_aliases(["bank of america", "bofa"]),
            Entity::new("GS", "Goldman Sachs", Financial)
                .with_aliases(["goldman sachs", "goldman"]),
            // UK listings
            Entity::new("HSBA.L", "HSBC", Financial).with_aliases(["hsbc", "hongkong shanghai"]),
            Entity::new("BP.L", "BP", Financial).with_aliases(["british petroleum", "bp"]),
            Entity::new("AZN.L", "AstraZeneca", Financial)
                .with_aliases(["astrazeneca", "astra zeneca"]),
            // Core SaaS
            Entity::new("CRM", "Salesforce", Saas).with_aliases(["salesforce", "marc benioff"]),
            Entity::new("SNOW", "Snowflake", Saas).with_aliases(["snowflake"]),
            Entity::new("TEAM", "Atlassian", Saas)
                .with_aliases(["atlassian", "jira", "confluence"]),
            Entity::new("ZM", "Zoom", Saas).with_aliases(["zoom", "zoom video"]),
            Entity::new("DDOG", "Datadog", Saas).with_aliases(["datadog"]),
            // High-growth tech
            Entity::new("SHOP", "Shopify", Saas).with_aliases(["shopify"]),
            Entity::new("SQ", "Block", Saas).with_aliases(["square", "block inc", "jack dorsey"]),
            Entity::new("PLTR", "Palantir", Saas).with_aliases(["palantir"]),
            Entity::new("COIN", "Coinbase", Saas).with_aliases(["coinbase"]),
            Entity::new("SPOT", "Spotify", Saas).with_aliases(["spotify"]),
        ];

        Self { entities }
    }

    /// Look up an entity by symbol (case-insensitive)
    pub fn get(&self, symbol: &str) -> Option<&Entity> {
        self.entities
            .iter()
            .find(|e| e.symbol.eq_ignore_ascii_case(symbol))
    }

    /// Entities tracked under a sector, in catalog order
    pub fn by_sector(&self, sector: Sector) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(move |e| e.sector == sector)
    }

    /// Entities whose symbol or aliases appear in the given text
    pub fn matching<'a>(
        &'a self,
        title: &'a str,
        summary: &'a str,
    ) -> impl Iterator<Item = &'a Entity> {
        self.entities
            .iter()
            .filter(move |e| e.mentions(title, summary))
    }

    /// Iterate over all entities
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Number of entities
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_shape() {
        let catalog = EntityCatalog::default_catalog();
        assert_eq!(catalog.len(), 20);
        assert_eq!(catalog.by_sector(Sector::Financial).count(), 10);
        assert_eq!(catalog.by_sector(Sector::Saas).count(), 10);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = EntityCatalog::default_catalog();
        let entity = catalog.get("hsba.l").unwrap();
        assert_eq!(entity.name, "HSBC");
        assert!(catalog.get("TSLA").is_none());
    }

    #[test]
    fn test_sector_sources() {
        let catalog = EntityCatalog::default_catalog();
        let snow = catalog.get("SNOW").unwrap();
        assert_eq!(snow.sources.len(), 4);
        assert!(snow.sources.iter().any(|s| s == "TechCrunch"));

        let jpm = catalog.get("JPM").unwrap();
        assert!(jpm.sources.iter().any(|s| s == "Reuters Business"));
    }

    #[test]
    fn test_mentions_by_symbol_and_alias() {
        let catalog = EntityCatalog::default_catalog();
        let nvda = catalog.get("NVDA").unwrap();

        assert!(nvda.mentions("NVDA rallies after earnings", ""));
        assert!(nvda.mentions("Chipmakers climb", "Jensen Huang unveils new GPU line"));
        assert!(!nvda.mentions("Bank stocks slip", "Rates weigh on lenders"));
    }

    #[test]
    fn test_matching_returns_every_mentioned_entity() {
        let catalog = EntityCatalog::default_catalog();
        let symbols: Vec<_> = catalog
            .matching("Salesforce and Snowflake expand partnership", "")
            .map(|e| e.symbol.as_str())
            .collect();
        assert_eq!(symbols, vec!["CRM", "SNOW"]);
    }

    #[test]
    fn test_entity_serde_defaults() {
        let entity: Entity =
            serde_json::from_str(r#"{"symbol":"ACME","name":"Acme","sector":"saas"}"#).unwrap();
        assert_eq!(entity.sector, Sector::Saas);
        assert!(entity.aliases.is_empty());
        assert!(entity.sources.is_empty());
    }
}

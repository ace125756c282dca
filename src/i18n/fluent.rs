// SPDX-License-Identifier: MPL-2.0
//! The translation table: one Fluent bundle per [`Locale`].
//!
//! Keys are Fluent message ids. A dotted key selects an attribute of the
//! message (`appTitle.tagline`); paths deeper than one attribute never resolve.

use super::locale::Locale;
use crate::error::{Error, Result};
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use fluent_syntax::ast;
use rust_embed::RustEmbed;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Outcome of resolving a key against one locale's table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(String),
    NotFound,
}

impl Lookup {
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    /// Returns the translation, or `key` itself when nothing was found.
    #[must_use]
    pub fn or_key(self, key: &str) -> String {
        match self {
            Lookup::Found(value) => value,
            Lookup::NotFound => key.to_string(),
        }
    }
}

/// Immutable set of translation bundles, built once at startup.
pub struct Catalog {
    bundles: HashMap<Locale, FluentBundle<FluentResource>>,
    keys: HashMap<Locale, BTreeSet<String>>,
}

impl Catalog {
    /// Builds the catalog from the `.ftl` files compiled into the binary.
    pub fn embedded() -> Result<Self> {
        let mut sources = Vec::with_capacity(Locale::ALL.len());
        for locale in Locale::ALL {
            let filename = format!("{}.ftl", locale.id());
            let file = Asset::get(&filename)
                .ok_or_else(|| Error::Catalog(format!("missing translation file {}", filename)))?;
            let source = String::from_utf8_lossy(file.data.as_ref()).into_owned();
            sources.push((locale, source));
        }
        Self::from_sources(sources)
    }

    /// Builds the catalog from explicit Fluent sources.
    ///
    /// Every supported locale must be given exactly one source.
    pub fn from_sources<I>(sources: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Locale, String)>,
    {
        let mut bundles = HashMap::new();
        let mut keys = HashMap::new();

        for (locale, source) in sources {
            if bundles.contains_key(&locale) {
                return Err(Error::Catalog(format!("duplicate source for {}", locale)));
            }
            keys.insert(locale, message_keys(&source));

            let resource = FluentResource::try_new(source).map_err(|(_, errors)| {
                Error::Catalog(format!("{}.ftl failed to parse: {:?}", locale, errors))
            })?;
            let mut bundle = FluentBundle::new(vec![locale.language_identifier()]);
            bundle.set_use_isolating(false);
            bundle.add_resource(resource).map_err(|errors| {
                Error::Catalog(format!("{}.ftl failed to register: {:?}", locale, errors))
            })?;
            bundles.insert(locale, bundle);
        }

        if let Some(missing) = Locale::ALL.iter().find(|l| !bundles.contains_key(l)) {
            return Err(Error::Catalog(format!("no translations for {}", missing)));
        }

        tracing::debug!(locales = bundles.len(), "translation catalog loaded");
        Ok(Self { bundles, keys })
    }

    /// Resolves `key` under `locale`.
    #[must_use]
    pub fn lookup(&self, locale: Locale, key: &str) -> Lookup {
        self.format(locale, key, None)
    }

    /// Resolves `key` under `locale`, filling Fluent variables from `args`.
    #[must_use]
    pub fn lookup_with_args(&self, locale: Locale, key: &str, args: &FluentArgs<'_>) -> Lookup {
        self.format(locale, key, Some(args))
    }

    fn format(&self, locale: Locale, key: &str, args: Option<&FluentArgs<'_>>) -> Lookup {
        let Some(bundle) = self.bundles.get(&locale) else {
            return Lookup::NotFound;
        };

        let mut segments = key.split('.');
        let (Some(id), attribute, None) = (segments.next(), segments.next(), segments.next())
        else {
            tracing::debug!(key, %locale, "key path too deep");
            return Lookup::NotFound;
        };
        if id.is_empty() || attribute.is_some_and(str::is_empty) {
            return Lookup::NotFound;
        }

        let Some(message) = bundle.get_message(id) else {
            tracing::debug!(key, %locale, "missing translation");
            return Lookup::NotFound;
        };
        let pattern = match attribute {
            None => message.value(),
            Some(name) => message.get_attribute(name).map(|attr| attr.value()),
        };
        let Some(pattern) = pattern else {
            tracing::debug!(key, %locale, "message has no such value");
            return Lookup::NotFound;
        };

        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            // Plain lookups of messages with variables always fail to fill them.
            if args.is_some() {
                tracing::warn!(key, %locale, ?errors, "translation formatted with errors");
            } else {
                tracing::debug!(key, %locale, ?errors, "translation formatted with errors");
            }
        }
        if value.is_empty() {
            tracing::debug!(key, %locale, "translation is empty");
            return Lookup::NotFound;
        }
        Lookup::Found(value.into_owned())
    }

    /// Every message id with a value and every `id.attribute` for `locale`, sorted.
    pub fn keys(&self, locale: Locale) -> impl Iterator<Item = &str> {
        self.keys
            .get(&locale)
            .into_iter()
            .flat_map(|keys| keys.iter().map(String::as_str))
    }

    /// Compares key sets across locales.
    #[must_use]
    pub fn parity_report(&self) -> ParityReport {
        let all: BTreeSet<&str> = Locale::ALL.iter().flat_map(|l| self.keys(*l)).collect();

        let missing = Locale::ALL
            .iter()
            .filter_map(|locale| {
                let present: BTreeSet<&str> = self.keys(*locale).collect();
                let absent: Vec<String> = all
                    .difference(&present)
                    .map(|key| (*key).to_string())
                    .collect();
                (!absent.is_empty()).then_some((*locale, absent))
            })
            .collect();

        ParityReport {
            total_keys: all.len(),
            missing,
        }
    }

    /// Fails with [`Error::CatalogDrift`] when any locale lacks a key another one has.
    pub fn verify_parity(&self) -> Result<()> {
        let report = self.parity_report();
        if report.is_consistent() {
            Ok(())
        } else {
            Err(Error::CatalogDrift(report.to_string()))
        }
    }
}

/// Keys present in some locale but absent from others.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParityReport {
    /// Size of the union of all locales' key sets.
    pub total_keys: usize,
    /// Per locale, the keys it lacks. Locales with full coverage are omitted.
    pub missing: Vec<(Locale, Vec<String>)>,
}

impl ParityReport {
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.missing.is_empty()
    }
}

impl fmt::Display for ParityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_consistent() {
            return write!(f, "all locales share {} keys", self.total_keys);
        }
        let parts: Vec<String> = self
            .missing
            .iter()
            .map(|(locale, keys)| format!("{} lacks [{}]", locale, keys.join(", ")))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

/// Message ids with a value, plus `id.attribute` for every attribute.
fn message_keys(source: &str) -> BTreeSet<String> {
    let resource = match fluent_syntax::parser::parse(source) {
        Ok(resource) => resource,
        Err((resource, _)) => resource,
    };

    let mut keys = BTreeSet::new();
    for entry in &resource.body {
        if let ast::Entry::Message(message) = entry {
            let id = message.id.name;
            if message.value.is_some() {
                keys.insert(id.to_string());
            }
            for attribute in &message.attributes {
                keys.insert(format!("{}.{}", id, attribute.id.name));
            }
        }
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    /// Entries whose display text is the key itself.
    const VALUE_EQUALS_KEY: [(Locale, &str); 1] = [(Locale::English, "days")];

    fn catalog(ml: &str, en: &str) -> Catalog {
        Catalog::from_sources([
            (Locale::Malayalam, ml.to_string()),
            (Locale::English, en.to_string()),
        ])
        .expect("test catalog should build")
    }

    #[test]
    fn embedded_catalog_loads() {
        let catalog = Catalog::embedded().expect("embedded catalog should parse");
        assert!(catalog.keys(Locale::English).count() > 100);
    }

    #[test]
    fn embedded_catalog_has_parity() {
        let catalog = Catalog::embedded().expect("embedded catalog should parse");
        let report = catalog.parity_report();
        assert!(report.is_consistent(), "{}", report);
        assert!(catalog.verify_parity().is_ok());
    }

    #[test]
    fn every_embedded_key_resolves_to_text() {
        let catalog = Catalog::embedded().expect("embedded catalog should parse");
        for locale in Locale::ALL {
            for key in catalog.keys(locale) {
                match catalog.lookup(locale, key) {
                    Lookup::Found(value) => {
                        assert!(!value.is_empty(), "{key} is empty in {locale}");
                        if !VALUE_EQUALS_KEY.contains(&(locale, key)) {
                            assert_ne!(value, key, "{key} resolves to itself in {locale}");
                        }
                    }
                    Lookup::NotFound => panic!("{key} listed but not resolvable in {locale}"),
                }
            }
        }
    }

    #[test]
    fn dashboard_label_in_both_locales() {
        let catalog = Catalog::embedded().expect("embedded catalog should parse");
        assert_eq!(
            catalog.lookup(Locale::Malayalam, "dashboard"),
            Lookup::Found("ഡാഷ്ബോർഡ്".into())
        );
        assert_eq!(
            catalog.lookup(Locale::English, "dashboard"),
            Lookup::Found("Dashboard".into())
        );
    }

    #[test]
    fn dotted_key_selects_attribute() {
        let catalog = Catalog::embedded().expect("embedded catalog should parse");
        assert_eq!(
            catalog.lookup(Locale::English, "appTitle.tagline"),
            Lookup::Found("For Kerala Farmers".into())
        );
        assert_eq!(
            catalog.lookup(Locale::Malayalam, "notFound.returnHome"),
            Lookup::Found("ഹോം പേജിലേക്ക് മടങ്ങുക".into())
        );
    }

    #[test]
    fn paths_below_a_leaf_are_not_found() {
        let catalog = Catalog::embedded().expect("embedded catalog should parse");
        for key in [
            "appTitle.tagline.extra",
            "dashboard.label",
            "totally.unknown.key",
            "",
            ".",
            "dashboard.",
            ".dashboard",
        ] {
            assert_eq!(catalog.lookup(Locale::English, key), Lookup::NotFound, "{key:?}");
        }
    }

    #[test]
    fn message_without_value_is_not_found_without_attribute() {
        let catalog = catalog(
            "menu =\n    .open = തുറക്കുക\n",
            "menu =\n    .open = Open\n",
        );
        assert_eq!(catalog.lookup(Locale::English, "menu"), Lookup::NotFound);
        assert_eq!(
            catalog.lookup(Locale::English, "menu.open"),
            Lookup::Found("Open".into())
        );
        assert_eq!(
            catalog.keys(Locale::English).collect::<Vec<_>>(),
            vec!["menu.open"]
        );
    }

    #[test]
    fn variables_are_filled_from_args() {
        let catalog = Catalog::embedded().expect("embedded catalog should parse");
        let mut args = FluentArgs::new();
        args.set("name", "Rajan");
        assert_eq!(
            catalog.lookup_with_args(Locale::English, "welcomeMessage", &args),
            Lookup::Found("Welcome, Rajan".into())
        );
        assert_eq!(
            catalog.lookup_with_args(Locale::Malayalam, "welcomeMessage", &args),
            Lookup::Found("സ്വാഗതം, Rajan".into())
        );
    }

    #[test]
    #[traced_test]
    fn missing_variable_still_resolves() {
        let catalog = Catalog::embedded().expect("embedded catalog should parse");
        let Lookup::Found(value) = catalog.lookup(Locale::English, "welcomeMessage") else {
            panic!("welcomeMessage should resolve without args");
        };
        assert!(value.starts_with("Welcome, "));
        assert!(logs_contain("translation formatted with errors"));
        assert!(!logs_contain("WARN"));
    }

    #[test]
    #[traced_test]
    fn missing_variable_with_args_warns() {
        let catalog = Catalog::embedded().expect("embedded catalog should parse");
        let args = FluentArgs::new();
        let lookup = catalog.lookup_with_args(Locale::English, "welcomeMessage", &args);
        assert!(lookup.is_found());
        assert!(logs_contain("WARN"));
    }

    #[test]
    fn key_named_value_is_found_not_fallback() {
        let catalog = Catalog::embedded().expect("embedded catalog should parse");
        assert_eq!(
            catalog.lookup(Locale::English, "days"),
            Lookup::Found("days".into())
        );
        assert_eq!(
            catalog.lookup(Locale::English, "totally.unknown.key"),
            Lookup::NotFound
        );
    }

    #[test]
    fn empty_value_is_not_found() {
        let catalog = catalog("blank = { \"\" }\n", "blank = { \"\" }\n");
        assert_eq!(catalog.lookup(Locale::English, "blank"), Lookup::NotFound);
        assert_eq!(catalog.lookup(Locale::Malayalam, "blank"), Lookup::NotFound);
    }

    #[test]
    fn drift_is_reported_per_locale() {
        let catalog = catalog(
            "dashboard = ഡാഷ്ബോർഡ്\n",
            "dashboard = Dashboard\nquery = Query\n",
        );
        let report = catalog.parity_report();
        assert_eq!(report.total_keys, 2);
        assert_eq!(
            report.missing,
            vec![(Locale::Malayalam, vec!["query".to_string()])]
        );
        assert_eq!(report.to_string(), "ml lacks [query]");
        assert!(matches!(
            catalog.verify_parity(),
            Err(Error::CatalogDrift(message)) if message.contains("query")
        ));
    }

    #[test]
    fn missing_locale_source_is_rejected() {
        let result = Catalog::from_sources([(Locale::English, "dashboard = Dashboard\n".into())]);
        assert!(matches!(result, Err(Error::Catalog(message)) if message.contains("ml")));
    }

    #[test]
    fn duplicate_locale_source_is_rejected() {
        let result = Catalog::from_sources([
            (Locale::English, "a = A\n".to_string()),
            (Locale::English, "a = B\n".to_string()),
        ]);
        assert!(matches!(result, Err(Error::Catalog(_))));
    }

    #[test]
    fn unparsable_source_is_rejected() {
        let result = Catalog::from_sources([
            (Locale::Malayalam, "= broken\n".to_string()),
            (Locale::English, "a = A\n".to_string()),
        ]);
        assert!(matches!(result, Err(Error::Catalog(message)) if message.contains("parse")));
    }

    #[test]
    fn lookup_or_key_falls_back() {
        assert_eq!(Lookup::NotFound.or_key("x.y"), "x.y");
        assert_eq!(Lookup::Found("X".into()).or_key("x"), "X");
    }
}

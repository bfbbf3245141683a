// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support.
//!
//! This module provides localization using the Fluent localization system.
//! It handles locale detection, loading of the embedded translation files and
//! message formatting. Localized date rendering built on top of it lives in
//! [`dates`].
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Embedded `.ftl` translation files
//! - Runtime locale switching
//! - Fallback to the default locale when a message is missing

pub mod dates;

use crate::config::{Config, DEFAULT_LOCALE};
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use tracing::warn;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
    default_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish_non_exhaustive()
    }
}

impl I18n {
    /// Loads every embedded translation and picks the current locale from
    /// the CLI argument, then the config file, then the OS.
    #[must_use]
    pub fn new(cli_lang: Option<&str>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = filename
                .strip_suffix(".ftl")
                .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
            else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            bundles.insert(locale.clone(), build_bundle(&locale, source));
            available_locales.push(locale);
        }
        available_locales.sort_by_key(ToString::to_string);

        let default_locale: LanguageIdentifier = DEFAULT_LOCALE.parse().unwrap_or_default();
        let os_locale = sys_locale::get_locale();
        let current_locale =
            resolve_locale(cli_lang, config, os_locale.as_deref(), &available_locales)
                .unwrap_or_else(|| default_locale.clone());

        Self {
            bundles,
            available_locales,
            current_locale,
            default_locale,
        }
    }

    /// Loads translations with `locale` selected if it is available,
    /// ignoring config and OS settings.
    #[must_use]
    pub fn with_locale(locale: &str) -> Self {
        let mut i18n = Self::new(None, &Config::default());
        if let Ok(id) = locale.parse::<LanguageIdentifier>() {
            i18n.set_locale(id);
        }
        i18n
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    #[must_use]
    pub fn available_locales(&self) -> &[LanguageIdentifier] {
        &self.available_locales
    }

    /// Switches locale. Returns `false` and keeps the current one if no
    /// translations exist for `locale`.
    pub fn set_locale(&mut self, locale: LanguageIdentifier) -> bool {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
            true
        } else {
            false
        }
    }

    /// Translates `key`, falling back to the default locale.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.tr_with_args(key, None)
    }

    /// Translates `key` with arguments, falling back to the default locale.
    ///
    /// Missing messages render as `MISSING: <key>`.
    #[must_use]
    pub fn tr_with_args(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        [&self.current_locale, &self.default_locale]
            .into_iter()
            .find_map(|locale| self.format_message(locale, key, args))
            .unwrap_or_else(|| format!("MISSING: {key}"))
    }

    fn format_message(
        &self,
        locale: &LanguageIdentifier,
        key: &str,
        args: Option<&FluentArgs<'_>>,
    ) -> Option<String> {
        let bundle = self.bundles.get(locale)?;
        let pattern = bundle.get_message(key)?.value()?;
        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        if errors.is_empty() {
            Some(value.into_owned())
        } else {
            warn!(%locale, key, ?errors, "failed to format message");
            None
        }
    }
}

fn build_bundle(locale: &LanguageIdentifier, source: String) -> FluentBundle<FluentResource> {
    let resource = FluentResource::try_new(source).unwrap_or_else(|(partial, errors)| {
        warn!(%locale, ?errors, "translation file has syntax errors");
        partial
    });
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    // Plain text output; no bidi isolation marks around placeables.
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        warn!(%locale, ?errors, "duplicate messages in translation file");
    }
    bundle
}

fn resolve_locale(
    cli_lang: Option<&str>,
    config: &Config,
    os_locale: Option<&str>,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    [cli_lang, config.general.language.as_deref(), os_locale]
        .into_iter()
        .flatten()
        .filter_map(|tag| tag.parse::<LanguageIdentifier>().ok())
        .find_map(|wanted| match_available(&wanted, available))
}

/// Exact match first, then the first available locale sharing the language.
fn match_available(
    wanted: &LanguageIdentifier,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    available
        .iter()
        .find(|l| *l == wanted)
        .or_else(|| available.iter().find(|l| l.language == wanted.language))
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeneralConfig;

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "fr".parse().unwrap()]
    }

    fn config_with(language: &str) -> Config {
        Config {
            general: GeneralConfig {
                language: Some(language.to_string()),
            },
            ..Config::default()
        }
    }

    #[test]
    fn resolve_locale_prefers_cli() {
        let lang = resolve_locale(Some("fr"), &config_with("en-US"), None, &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_uses_config_next() {
        let lang = resolve_locale(None, &config_with("fr"), Some("en-US"), &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_falls_back_to_os() {
        let lang = resolve_locale(None, &Config::default(), Some("fr-CA"), &available());
        assert_eq!(lang, Some("fr".parse().unwrap()));
    }

    #[test]
    fn resolve_locale_skips_unavailable_and_invalid() {
        let lang = resolve_locale(
            Some("!!"),
            &config_with("de-DE"),
            Some("en-GB"),
            &available(),
        );
        assert_eq!(lang, Some("en-US".parse().unwrap()));
        assert_eq!(
            resolve_locale(None, &Config::default(), Some("ja"), &available()),
            None
        );
    }

    #[test]
    fn embedded_locales_are_loaded() {
        let i18n = I18n::with_locale("en-US");
        let tags: Vec<String> = i18n
            .available_locales()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(tags, vec!["en-US", "fr"]);
    }

    #[test]
    fn set_locale_rejects_unknown() {
        let mut i18n = I18n::with_locale("en-US");
        assert!(!i18n.set_locale("de".parse().unwrap()));
        assert_eq!(i18n.current_locale().to_string(), "en-US");
        assert!(i18n.set_locale("fr".parse().unwrap()));
        assert_eq!(i18n.current_locale().to_string(), "fr");
    }

    #[test]
    fn missing_message_is_marked() {
        let i18n = I18n::with_locale("en-US");
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }

    #[test]
    fn tr_reads_current_locale() {
        assert_eq!(I18n::with_locale("en-US").tr("relative-now"), "just now");
        assert_eq!(I18n::with_locale("fr").tr("relative-now"), "maintenant");
    }
}

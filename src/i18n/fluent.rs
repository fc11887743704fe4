// SPDX-License-Identifier: MPL-2.0
use crate::config::{Config, DEFAULT_LOCALE};
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
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
            .finish()
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale_str) = filename.strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                tracing::warn!(file = filename, "skipping translation with invalid locale name");
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource = match FluentResource::try_new(source) {
                Ok(resource) => resource,
                Err((resource, errors)) => {
                    tracing::warn!(file = filename, count = errors.len(), "translation has syntax errors");
                    resource
                }
            };

            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            // Placeables are rendered inline; bidi isolation marks would show up in widgets.
            bundle.set_use_isolating(false);
            if let Err(errors) = bundle.add_resource(resource) {
                tracing::warn!(file = filename, count = errors.len(), "duplicate translation keys");
            }
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }
        available_locales.sort_by_key(ToString::to_string);

        let default_locale: LanguageIdentifier = DEFAULT_LOCALE
            .parse()
            .unwrap_or_else(|_| LanguageIdentifier::default());
        let current_locale = resolve_locale(cli_lang, config, &available_locales)
            .unwrap_or(default_locale);
        tracing::debug!(locale = %current_locale, "selected locale");

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    #[must_use]
    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// True when the current bundle defines `key`, whatever its placeables.
    #[must_use]
    pub fn has_key(&self, key: &str) -> bool {
        self.bundles
            .get(&self.current_locale)
            .is_some_and(|bundle| bundle.has_message(key))
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, FluentValue::from(*value));
        }
        self.format(key, Some(&fluent_args))
    }

    /// Formats `key` with a numeric argument so plural selectors apply.
    pub fn tr_with_count(&self, key: &str, name: &str, count: i64) -> String {
        let mut fluent_args = FluentArgs::new();
        fluent_args.set(name, FluentValue::from(count));
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, args, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

/// Finds `wanted` among `available`, accepting a language-only match
/// (`tr-TR` matches `tr`) when there is no exact one.
fn match_available(
    wanted: &LanguageIdentifier,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    available
        .iter()
        .find(|candidate| *candidate == wanted)
        .or_else(|| {
            available
                .iter()
                .find(|candidate| candidate.language == wanted.language)
        })
        .cloned()
}

fn resolve_from_str(raw: &str, available: &[LanguageIdentifier]) -> Option<LanguageIdentifier> {
    raw.parse::<LanguageIdentifier>()
        .ok()
        .and_then(|lang| match_available(&lang, available))
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Check CLI args
    if let Some(lang) = cli_lang.and_then(|raw| resolve_from_str(&raw, available)) {
        return Some(lang);
    }

    // 2. Check config file
    if let Some(lang) = config
        .general
        .language
        .as_deref()
        .and_then(|raw| resolve_from_str(raw, available))
    {
        return Some(lang);
    }

    // 3. Check OS locale
    sys_locale::get_locale().and_then(|raw| resolve_from_str(&raw, available))
}

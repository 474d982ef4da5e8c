//! Quoting resolver
//!
//! Decides, per name segment, whether the rendered SQL needs quoting. A
//! segment is quoted when the name was written quoted or when it collides
//! with a reserved word of the target platform. The keyword set depends on
//! the platform, so this runs when SQL is emitted, not when names are parsed.

use std::fmt;

use crate::platform::{CaseFolding, IdentifierQuoting, KeywordCheck, Platform};

use super::asset_name::AssetName;

/// The strict interpretation of a name refers to a different object than
/// the one the legacy rendering refers to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameDivergence {
    /// Raw input the name was built from
    pub raw: String,
    /// Effective name under the legacy rules
    pub current: String,
    /// Effective name under the strict rules
    pub future: String,
}

impl fmt::Display for NameDivergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name '{}' currently resolves to '{}' but will resolve to '{}' under strict identifier rules; quote the name to preserve its case",
            self.raw, self.current, self.future
        )
    }
}

/// Rendered SQL name plus an optional forward-compatibility warning
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedName {
    sql: String,
    divergence: Option<NameDivergence>,
}

impl RenderedName {
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn divergence(&self) -> Option<&NameDivergence> {
        self.divergence.as_ref()
    }

    pub fn into_sql(self) -> String {
        self.sql
    }
}

impl fmt::Display for RenderedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.sql)
    }
}

/// Renders asset names for a target platform
#[derive(Debug, Clone, Copy, Default)]
pub struct QuotingResolver {
    report_divergences: bool,
}

impl QuotingResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a `tracing` warning whenever a rendered name diverges
    pub fn report_divergences(mut self, enabled: bool) -> Self {
        self.report_divergences = enabled;
        self
    }

    /// Render `asset` with a platform providing every capability
    pub fn render_for<P: Platform + ?Sized>(&self, asset: &AssetName, platform: &P) -> RenderedName {
        self.render(asset, platform, platform, platform)
    }

    /// Render `asset` from individual capabilities
    pub fn render<K, F, Q>(
        &self,
        asset: &AssetName,
        keywords: &K,
        folding: &F,
        quoting: &Q,
    ) -> RenderedName
    where
        K: KeywordCheck + ?Sized,
        F: CaseFolding + ?Sized,
        Q: IdentifierQuoting + ?Sized,
    {
        let qualified = asset.qualified_name();
        let mut parts = Vec::new();
        let mut normalized_parts = Vec::new();

        for segment in qualified.split('.') {
            if asset.is_quoted() || keywords.is_keyword(segment) {
                parts.push(quoting.quote_single_identifier(segment));
                normalized_parts.push(segment.to_string());
            } else {
                parts.push(segment.to_string());
                normalized_parts.push(folding.fold_case(segment));
            }
        }

        let sql = parts.join(".");
        let divergence = if asset.is_strict() {
            let future_parts: Vec<String> = asset
                .identifiers()
                .iter()
                .map(|identifier| identifier.effective_value(folding))
                .collect();

            // Segment lists, not joined strings: `"a.b"` is one segment
            (normalized_parts != future_parts).then(|| NameDivergence {
                raw: asset.raw().to_string(),
                current: normalized_parts.join("."),
                future: future_parts.join("."),
            })
        } else {
            None
        };

        if let (true, Some(divergence)) = (self.report_divergences, &divergence) {
            tracing::warn!("{}", divergence);
        }

        RenderedName { sql, divergence }
    }
}

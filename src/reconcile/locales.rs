//! Parent-locale resolution.
//!
//! CLDR's `parentLocales` table says which locale a child inherits from when
//! it is not a plain truncation of its identifier (e.g. `en-AU` -> `en-001`).
//! The formatting library only ships a subset of CLDR locales, so children in
//! the curated exclusion set are dropped, and CLDR's internal "root" locale is
//! replaced by `en`, which the library treats as equivalent.

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::domain::LocaleParentMap;

/// CLDR's top-of-hierarchy sentinel.
pub const ROOT_LOCALE: &str = "root";

/// Stand-in for [`ROOT_LOCALE`] in the generated data.
pub const BASE_LOCALE: &str = "en";

/// Locales and bare language subtags that are not shipped.
pub const EXCLUDED_LOCALES: &[&str] = &[
    // Esperanto, Interlingua, Volapuk are made up languages.
    "eo", "ia", "vo",
    // Church Slavic, Manx, Prussian are historical languages.
    "cu", "gv", "prg",
    // Valencian differs from its parent only by a single character (è/é).
    "ca-ES-VALENCIA",
    // Africa secondary languages.
    "agq", "ak", "am", "asa", "bas", "bem", "bez", "bm", "cgg", "dav",
    "dje", "dua", "dyo", "ebu", "ee", "ewo", "ff", "ff-Latn", "guz",
    "ha", "ig", "jgo", "jmc", "kab", "kam", "kea", "kde", "ki", "kkj",
    "kln", "khq", "ksb", "ksf", "lag", "luo", "luy", "lu", "lg", "ln",
    "mas", "mer", "mua", "mgo", "mgh", "mfe", "naq", "nd", "nmg", "nnh",
    "nus", "nyn", "om", "pcm", "rof", "rwk", "saq", "seh", "ses", "sbp",
    "sg", "shi", "sn", "teo", "ti", "tzm", "twq", "vai", "vai-Latn", "vun",
    "wo", "xog", "xh", "zgh", "yav", "yo", "zu",
    // Europe secondary languages.
    "br", "dsb", "fo", "fur", "fy", "hsb", "ksh", "kw", "nds", "or",
    "rm", "se", "smn", "wae",
    // India secondary languages.
    "as", "brx", "gu", "kok", "ks", "mai", "ml", "mni", "mr", "sat",
    "sd", "te",
    // Other infrequently used locales.
    "ceb", "ccp", "chr", "ckb", "haw", "ii", "jv", "kl", "kn", "lkt",
    "lrc", "mi", "mzn", "os", "qu", "row", "sah", "su", "tt", "ug", "yi",
    // Special "grouping" locales.
    "root", "en-US-POSIX",
];

/// Deseret and Shavian are made up scripts.
///
/// The exclusion set matches whole identifiers and language subtags, never a
/// script, so these two are removed separately after the map is built.
pub const INVENTED_SCRIPT_LOCALES: [&str; 2] = ["en-Dsrt", "en-Shaw"];

/// A fixed set of excluded locale identifiers and language subtags.
#[derive(Debug, Clone)]
pub struct ExclusionSet {
    entries: BTreeSet<String>,
}

impl ExclusionSet {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// The curated list in [`EXCLUDED_LOCALES`].
    pub fn curated() -> Self {
        Self::new(EXCLUDED_LOCALES.iter().copied())
    }

    /// `true` when the full identifier or its leading language subtag is listed.
    pub fn excludes(&self, locale: &str) -> bool {
        let language = locale.split('-').next().unwrap_or(locale);
        self.entries.contains(locale) || self.entries.contains(language)
    }
}

/// Counters for one resolution pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParentStats {
    pub pairs_read: usize,
    pub root_rewritten: usize,
    pub excluded: usize,
    pub invented_scripts_removed: usize,
}

/// Build the child -> parent map from raw CLDR pairs.
///
/// Pairs are handled independently of each other, so the result does not depend
/// on the order the pairs arrive in.
pub fn resolve_parent_locales<I>(pairs: I, exclusions: &ExclusionSet) -> (LocaleParentMap, ParentStats)
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut parents = LocaleParentMap::new();
    let mut stats = ParentStats::default();

    for (child, mut parent) in pairs {
        stats.pairs_read += 1;
        if parent == ROOT_LOCALE {
            parent = BASE_LOCALE.to_string();
            stats.root_rewritten += 1;
        }
        if exclusions.excludes(&child) {
            debug!(child = %child, "parent locale excluded");
            stats.excluded += 1;
            continue;
        }
        parents.insert(child, parent);
    }

    for locale in INVENTED_SCRIPT_LOCALES {
        if parents.remove(locale).is_some() {
            debug!(child = locale, "invented script locale removed");
            stats.invented_scripts_removed += 1;
        }
    }

    info!(
        read = stats.pairs_read,
        kept = parents.len(),
        excluded = stats.excluded,
        "parent locales resolved"
    );

    (parents, stats)
}

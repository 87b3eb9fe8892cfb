//! Run-time options for a check.

use std::{collections::BTreeMap, fmt};

use math_font_store::{FontStore, ZeroPolicy};

use crate::catalog::MathStyle;

/// Options for a check-and-repair run.
#[derive(Clone, Default)]
pub struct CheckOptions<'a> {
    /// How stored zero constants are read.
    pub zero_policy: ZeroPolicy,

    donors: BTreeMap<MathStyle, &'a dyn FontStore>,
}

impl<'a> CheckOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn zero_policy(mut self, policy: ZeroPolicy) -> Self {
        self.zero_policy = policy;
        self
    }

    /// Use `donor` as the source of missing glyphs of `style`.
    pub fn donor(mut self, style: MathStyle, donor: &'a dyn FontStore) -> Self {
        self.donors.insert(style, donor);
        self
    }

    /// The donor font for `style`, if one was supplied.
    pub fn donor_for(&self, style: MathStyle) -> Option<&'a dyn FontStore> {
        self.donors.get(&style).copied()
    }
}

impl fmt::Debug for CheckOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckOptions")
            .field("zero_policy", &self.zero_policy)
            .field("donors", &self.donors.keys().collect::<Vec<_>>())
            .finish()
    }
}

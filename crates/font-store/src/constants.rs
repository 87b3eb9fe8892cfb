//! Named MATH table constants.

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

macro_rules! math_constants {
    ($($name:ident),+ $(,)?) => {
        /// A named scalar of the OpenType MATH table.
        ///
        /// Covers the MathConstants subtable in table order, followed by
        /// `MinConnectorOverlap` from MathVariants.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum MathConstant {
            $($name),+
        }

        impl MathConstant {
            /// Every constant, in table order.
            pub const ALL: &[MathConstant] = &[$(MathConstant::$name),+];

            pub const fn name(self) -> &'static str {
                match self {
                    $(MathConstant::$name => stringify!($name)),+
                }
            }
        }
    };
}

math_constants!(
    ScriptPercentScaleDown,
    ScriptScriptPercentScaleDown,
    DelimitedSubFormulaMinHeight,
    DisplayOperatorMinHeight,
    MathLeading,
    AxisHeight,
    AccentBaseHeight,
    FlattenedAccentBaseHeight,
    SubscriptShiftDown,
    SubscriptTopMax,
    SubscriptBaselineDropMin,
    SuperscriptShiftUp,
    SuperscriptShiftUpCramped,
    SuperscriptBottomMin,
    SuperscriptBaselineDropMax,
    SubSuperscriptGapMin,
    SuperscriptBottomMaxWithSubscript,
    SpaceAfterScript,
    UpperLimitGapMin,
    UpperLimitBaselineRiseMin,
    LowerLimitGapMin,
    LowerLimitBaselineDropMin,
    StackTopShiftUp,
    StackTopDisplayStyleShiftUp,
    StackBottomShiftDown,
    StackBottomDisplayStyleShiftDown,
    StackGapMin,
    StackDisplayStyleGapMin,
    StretchStackTopShiftUp,
    StretchStackBottomShiftDown,
    StretchStackGapAboveMin,
    StretchStackGapBelowMin,
    FractionNumeratorShiftUp,
    FractionNumeratorDisplayStyleShiftUp,
    FractionDenominatorShiftDown,
    FractionDenominatorDisplayStyleShiftDown,
    FractionNumeratorGapMin,
    FractionNumDisplayStyleGapMin,
    FractionRuleThickness,
    FractionDenominatorGapMin,
    FractionDenomDisplayStyleGapMin,
    SkewedFractionHorizontalGap,
    SkewedFractionVerticalGap,
    OverbarVerticalGap,
    OverbarRuleThickness,
    OverbarExtraAscender,
    UnderbarVerticalGap,
    UnderbarRuleThickness,
    UnderbarExtraDescender,
    RadicalVerticalGap,
    RadicalDisplayStyleVerticalGap,
    RadicalRuleThickness,
    RadicalExtraAscender,
    RadicalKernBeforeDegree,
    RadicalKernAfterDegree,
    RadicalDegreeBottomRaisePercent,
    MinConnectorOverlap,
);

impl fmt::Display for MathConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a stored zero is read back.
///
/// Fonts produced by older editors store 0 for constants that were never
/// filled in, so a zero cannot be told apart from a deliberate zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ZeroPolicy {
    /// A stored 0 counts as unset.
    #[default]
    ZeroMeansUnset,
    /// Only a missing value counts as unset.
    Explicit,
}

/// The constants of a font's math table.
///
/// Values are optional: a constant that was never written has no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MathConstants(BTreeMap<MathConstant, i32>);

impl MathConstants {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stored value, if any, regardless of policy.
    pub fn raw(&self, constant: MathConstant) -> Option<i32> {
        self.0.get(&constant).copied()
    }

    /// The value as seen under `policy`; `None` means unset.
    pub fn get(&self, constant: MathConstant, policy: ZeroPolicy) -> Option<i32> {
        match (self.raw(constant), policy) {
            (Some(0), ZeroPolicy::ZeroMeansUnset) => {
                log::debug!("{constant} is stored as 0 and read as unset");
                None
            }
            (value, _) => value,
        }
    }

    pub fn set(&mut self, constant: MathConstant, value: i32) {
        self.0.insert(constant, value);
    }

    pub fn clear(&mut self, constant: MathConstant) {
        self.0.remove(&constant);
    }

    pub fn iter(&self) -> impl Iterator<Item = (MathConstant, i32)> + '_ {
        self.0.iter().map(|(k, v)| (*k, *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

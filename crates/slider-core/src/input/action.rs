use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    IntoStaticStr,
)]
#[repr(u8)]
pub enum OsuAction {
    #[strum(serialize = "L")]
    LeftButton = 0,
    #[strum(serialize = "R")]
    RightButton = 1,
}

impl OsuAction {
    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl std::fmt::Display for OsuAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

/// Set of actions held at one instant.
///
/// A plain value: every operation returns a new set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Vec<OsuAction>", into = "Vec<OsuAction>")]
pub struct ActionSet(u8);

impl ActionSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn single(action: OsuAction) -> Self {
        Self(action.bit())
    }

    pub fn contains(&self, action: OsuAction) -> bool {
        self.0 & action.bit() != 0
    }

    pub fn with(self, action: OsuAction) -> Self {
        self.union(Self::single(action))
    }

    pub fn without(self, action: OsuAction) -> Self {
        Self(self.0 & !action.bit())
    }

    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Actions in `self` that are not in `other`
    pub fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Held actions in declaration order
    pub fn iter(self) -> impl Iterator<Item = OsuAction> {
        OsuAction::iter().filter(move |a| self.contains(*a))
    }

    /// First held action in declaration order
    pub fn first(&self) -> Option<OsuAction> {
        self.iter().next()
    }
}

impl FromIterator<OsuAction> for ActionSet {
    fn from_iter<I: IntoIterator<Item = OsuAction>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl From<Vec<OsuAction>> for ActionSet {
    fn from(actions: Vec<OsuAction>) -> Self {
        actions.into_iter().collect()
    }
}

impl From<ActionSet> for Vec<OsuAction> {
    fn from(set: ActionSet) -> Self {
        set.iter().collect()
    }
}

impl std::fmt::Display for ActionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        for action in self.iter() {
            write!(f, "{}", action)?;
        }
        Ok(())
    }
}

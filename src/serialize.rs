//! Serde support, enabled by the `serde` feature.
//!
//! A [`RankedVec`] is written as a plain sequence of its items, best first.
//! The comparator and tie policy aren't written at all,
//! so reading one back needs a comparator that implements [`Default`].
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::{sorting, Comparator, RankedVec, TiePolicy};

impl<T: Serialize, C> Serialize for RankedVec<T, C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.items)
    }
}

impl<'de, T, C> Deserialize<'de> for RankedVec<T, C>
where
    T: Deserialize<'de>,
    C: Comparator<T> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut items = Vec::<T>::deserialize(deserializer)?;
        let comparator = C::default();
        // Already ranked input is left untouched, including the order of equal items
        sorting::rank_vec(&mut items, &comparator, TiePolicy::OldestFirst);
        Ok(RankedVec {
            items,
            comparator,
            ties: TiePolicy::default(),
        })
    }
}

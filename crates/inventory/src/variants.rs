//! Variant structure and its flat wire codec.
//!
//! A product's stock is a two-level insertion-ordered mapping
//! color → size → quantity. Storage keeps the whole mapping in a single
//! table cell as semicolon-separated color blocks:
//!
//! ```text
//! Qora: S-5, M-3; Oq: L-2
//! ```
//!
//! The codec is total in both directions. [`encode`] cannot fail;
//! [`decode`] drops any fragment it cannot parse and never errors, because
//! the storage layer enforces no schema and historic files must keep
//! loading. Color and size names containing one of the delimiters
//! (`;`, `:`, `,`, `-`) do not survive a round trip; that is a limitation
//! of the stored format itself, kept for compatibility with existing data.

use indexmap::IndexMap;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Sizes of one color, each with its stock quantity.
pub type SizeQuantities = IndexMap<String, u32>;

/// Insertion-ordered color → size → quantity mapping.
///
/// Equality is order-independent (two maps with the same entries are
/// equal); iteration order follows insertion for stable display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantMap(IndexMap<String, SizeQuantities>);

impl VariantMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of colors.
    pub fn color_count(&self) -> usize {
        self.0.len()
    }

    /// Add a color with no sizes yet. Returns `false` if it already exists.
    ///
    /// A color without sizes is a transient editing state; it still
    /// round-trips through the codec.
    pub fn add_color(&mut self, color: impl Into<String>) -> bool {
        let color = color.into();
        if self.0.contains_key(&color) {
            return false;
        }
        self.0.insert(color, SizeQuantities::new());
        true
    }

    /// Set the quantity for a color/size pair, inserting either level as
    /// needed. Quantity 0 is a real entry, distinct from an absent size.
    pub fn set_quantity(&mut self, color: impl Into<String>, size: impl Into<String>, qty: u32) {
        self.0
            .entry(color.into())
            .or_default()
            .insert(size.into(), qty);
    }

    pub fn quantity(&self, color: &str, size: &str) -> Option<u32> {
        self.0.get(color).and_then(|sizes| sizes.get(size)).copied()
    }

    /// Remove one size entry. A color whose last size is removed is
    /// removed too (the entry workflow never keeps empty colors around).
    /// Returns `false` if the pair did not exist.
    pub fn remove_size(&mut self, color: &str, size: &str) -> bool {
        let Some(sizes) = self.0.get_mut(color) else {
            return false;
        };
        if sizes.shift_remove(size).is_none() {
            return false;
        }
        if sizes.is_empty() {
            self.0.shift_remove(color);
        }
        true
    }

    /// Iterate colors in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SizeQuantities)> {
        self.0.iter().map(|(color, sizes)| (color.as_str(), sizes))
    }

    /// Total stock across every color/size entry.
    pub fn unit_count(&self) -> u64 {
        self.0
            .values()
            .flat_map(|sizes| sizes.values())
            .map(|qty| u64::from(*qty))
            .sum()
    }
}

impl<C, S> FromIterator<(C, Vec<(S, u32)>)> for VariantMap
where
    C: Into<String>,
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (C, Vec<(S, u32)>)>>(iter: I) -> Self {
        let mut map = VariantMap::new();
        for (color, sizes) in iter {
            let color = color.into();
            map.add_color(color.clone());
            for (size, qty) in sizes {
                map.set_quantity(color.clone(), size, qty);
            }
        }
        map
    }
}

/// Serializes as the encoded wire string, so a record field of this type
/// lands in storage as the original single-cell column.
impl Serialize for VariantMap {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        serializer.serialize_str(&encode(self))
    }
}

impl<'de> Deserialize<'de> for VariantMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let field = Option::<String>::deserialize(deserializer)?;
        Ok(decode(field.as_deref()))
    }
}

/// Encode a variant mapping into its flat stored form.
///
/// One block per color in map order, size pairs joined with `", "`, blocks
/// with `"; "`. A color with no sizes encodes to `"<color>: "`. The empty
/// map encodes to the empty string. Never fails.
pub fn encode(variants: &VariantMap) -> String {
    let blocks: Vec<String> = variants
        .0
        .iter()
        .map(|(color, sizes)| {
            let pairs: Vec<String> = sizes
                .iter()
                .map(|(size, qty)| format!("{size}-{qty}"))
                .collect();
            format!("{color}: {}", pairs.join(", "))
        })
        .collect();
    blocks.join("; ")
}

/// Decode a stored field back into a variant mapping.
///
/// Absent or empty input yields the empty map. Each `"; "`-separated block
/// needs a `:`; the trimmed text before the first `:` becomes the color
/// key (inserted even when no sizes follow, and overwriting an earlier
/// block with the same color). Each `", "`-separated pair needs a `-`; it
/// splits at the first `-` into a trimmed size and a trimmed quantity
/// parsed as a non-negative integer. Anything that does not fit this shape
/// is skipped, not reported: the rest of the field still loads.
pub fn decode(field: Option<&str>) -> VariantMap {
    let mut variants = VariantMap::new();
    let Some(field) = field else {
        return variants;
    };
    if field.is_empty() {
        return variants;
    }

    for block in field.split("; ") {
        let Some((color, rest)) = block.split_once(':') else {
            continue;
        };
        let mut sizes = SizeQuantities::new();
        let rest = rest.trim();
        if !rest.is_empty() {
            for pair in rest.split(", ") {
                let Some((size, qty)) = pair.split_once('-') else {
                    continue;
                };
                let Ok(qty) = qty.trim().parse::<u32>() else {
                    continue;
                };
                sizes.insert(size.trim().to_string(), qty);
            }
        }
        variants.0.insert(color.trim().to_string(), sizes);
    }

    variants
}

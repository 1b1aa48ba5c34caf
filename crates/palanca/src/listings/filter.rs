use super::domain::{Property, PropertyKind};

/// Search constraints applied to catalog queries.
///
/// An unset field places no constraint. The literal city `"all"` is accepted
/// and also places no constraint, matching the public search form's default
/// option.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyFilter {
    pub city: Option<String>,
    pub kind: Option<PropertyKind>,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub bedrooms: Option<u8>,
}

impl PropertyFilter {
    pub fn matches(&self, property: &Property) -> bool {
        if let Some(city) = &self.city {
            if !city.eq_ignore_ascii_case("all") {
                let needle = city.to_lowercase();
                if !property.city.to_lowercase().contains(&needle) {
                    return false;
                }
            }
        }

        if let Some(kind) = self.kind {
            if property.kind != kind {
                return false;
            }
        }

        if let Some(min) = self.min_price {
            if property.price < min {
                return false;
            }
        }

        if let Some(max) = self.max_price {
            if property.price > max {
                return false;
            }
        }

        // Exact bedroom count; listings without bedrooms never match one.
        if let Some(bedrooms) = self.bedrooms {
            if property.bedrooms != Some(bedrooms) {
                return false;
            }
        }

        true
    }
}

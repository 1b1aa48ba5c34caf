use super::{ScoreComponent, ScoreFactor, ScoringConfig};
use crate::listings::domain::Property;

/// Hard ceiling on the composite score.
const SCORE_CAP: u16 = 100;

pub(crate) fn score_listing(
    property: &Property,
    config: &ScoringConfig,
) -> (Vec<ScoreComponent>, u8) {
    let mut components = Vec::new();
    let mut total: u16 = 0;

    // Lower asking price earns more points.
    let price_points: u8 = match property.price {
        price if price < 30_000_000 => 25,
        price if price < 60_000_000 => 20,
        price if price < 100_000_000 => 15,
        _ => 10,
    };
    components.push(ScoreComponent {
        factor: ScoreFactor::Price,
        points: price_points,
        notes: format!("asking {} {}", property.price, property.currency),
    });
    total += u16::from(price_points);

    let area_points: u8 = match property.area {
        area if area > 150 => 20,
        area if area > 100 => 15,
        area if area > 80 => 10,
        _ => 5,
    };
    components.push(ScoreComponent {
        factor: ScoreFactor::Area,
        points: area_points,
        notes: format!("{} m2", property.area),
    });
    total += u16::from(area_points);

    // Listings without bedrooms (commercial, land) contribute nothing here.
    if let Some(bedrooms) = property.bedrooms {
        let bedroom_points: u8 = match bedrooms {
            bedrooms if bedrooms >= 4 => 15,
            3 => 12,
            2 => 8,
            _ => 5,
        };
        components.push(ScoreComponent {
            factor: ScoreFactor::Bedrooms,
            points: bedroom_points,
            notes: format!("{bedrooms} bedroom(s)"),
        });
        total += u16::from(bedroom_points);
    }

    let location_points: u8 = if property.city == config.primary_city {
        20
    } else if property.city == config.secondary_city {
        15
    } else {
        10
    };
    components.push(ScoreComponent {
        factor: ScoreFactor::Location,
        points: location_points,
        notes: format!("located in {}", property.city),
    });
    total += u16::from(location_points);

    let feature_points = property.features.len().saturating_mul(3).min(20) as u8;
    components.push(ScoreComponent {
        factor: ScoreFactor::Features,
        points: feature_points,
        notes: format!("{} amenities listed", property.features.len()),
    });
    total += u16::from(feature_points);

    (components, total.min(SCORE_CAP) as u8)
}

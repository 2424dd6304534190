//! The fixed set of animal cards shown on the page.
//!
//! Amounts are display numbers in XLM. Nothing here is ever mutated: a
//! simulated donation leaves `raised` untouched.

use crate::locale::Locale;

const PLACEHOLDER_IMAGE: &str = "/api/placeholder/300/200";

#[derive(Debug, Clone, PartialEq)]
pub struct AnimalCard {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub raised: f64,
    pub target: f64,
}

impl AnimalCard {
    fn ratio_percent(&self) -> f64 {
        if self.target > 0.0 {
            self.raised / self.target * 100.0
        } else if self.raised > 0.0 {
            100.0
        } else {
            0.0
        }
    }

    /// Width of the progress bar, clamped to `0..=100`.
    pub fn progress_percent(&self) -> f64 {
        self.ratio_percent().clamp(0.0, 100.0)
    }

    /// Rounded percentage for the "% completed" label. Overfunded cards read above 100.
    ///
    /// Halves round towards positive infinity, so `-2.5` reads as `-2`.
    pub fn completion_percent(&self) -> i64 {
        (self.ratio_percent() + 0.5).floor() as i64
    }

    pub fn emoji(&self) -> &'static str {
        match self.id {
            1 => "🐱",
            2 => "🐕",
            _ => "🐈",
        }
    }
}

/// The three cards, in display order.
pub fn animals(locale: Locale) -> Vec<AnimalCard> {
    let descriptions = match locale {
        Locale::Tr => [
            "Yaralı patiyi iyileşen sevimli kedi",
            "Soğuktan korunmaya muhtaç köpek",
            "Mama desteğine ihtiyacı olan genç kedi",
        ],
        Locale::En => [
            "A sweet cat recovering from an injured paw",
            "A dog in need of shelter from the cold",
            "A young cat in need of food support",
        ],
    };

    vec![
        AnimalCard {
            id: 1,
            name: "Minnoş",
            description: descriptions[0],
            image: PLACEHOLDER_IMAGE,
            raised: 250.0,
            target: 500.0,
        },
        AnimalCard {
            id: 2,
            name: "Karabaş",
            description: descriptions[1],
            image: PLACEHOLDER_IMAGE,
            raised: 180.0,
            target: 400.0,
        },
        AnimalCard {
            id: 3,
            name: "Pamuk",
            description: descriptions[2],
            image: PLACEHOLDER_IMAGE,
            raised: 320.0,
            target: 600.0,
        },
    ]
}

pub fn find(locale: Locale, id: u32) -> Option<AnimalCard> {
    animals(locale).into_iter().find(|card| card.id == id)
}

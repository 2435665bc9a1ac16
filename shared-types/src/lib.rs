use serde::{Deserialize, Serialize};

/// A bookable salon service. Catalog entries are fixed at process start and
/// never mutated.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Service {
    pub id: i32,
    pub name: String,
    pub duration_minutes: i32,
    pub price: i32,
    pub description: String,
    pub popular: bool,
}

/// The technician a booking is placed with. The booking flow pins a single
/// featured technician rather than offering a choice.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Technician {
    pub id: i32,
    pub name: String,
    pub specialty: String,
    pub experience: String,
    pub rating: f64,
    pub avatar: String,
}

/// Relative difficulty of a gallery piece.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Simple,
    Medium,
    Complex,
}

impl Difficulty {
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Simple => "簡約",
            Difficulty::Medium => "中等",
            Difficulty::Complex => "複雜",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Difficulty::Simple => "#10B981",
            Difficulty::Medium => "#F59E0B",
            Difficulty::Complex => "#EF4444",
        }
    }
}

/// One nail-art piece in the work gallery.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WorkItem {
    pub id: i32,
    pub title: String,
    pub artist: String,
    pub price: String,
    pub duration: String,
    pub tags: Vec<String>,
    pub likes: i32,
    pub difficulty: Difficulty,
    pub featured: bool,
    pub image: String,
}

/// A ranked entry in the artist directory.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NailArtist {
    pub id: i32,
    pub rank: i32,
    pub name: String,
    pub avatar: String,
    pub rating: f64,
    pub reviews: i32,
    pub specialties: Vec<String>,
    pub location: String,
    pub experience: String,
    pub price_range: String,
    pub portfolio: i32,
    pub followers: i32,
    pub verified: bool,
    pub featured: bool,
    pub bio: String,
    pub available_slots: i32,
    pub response_time: String,
}

//! The fixed, read-only data behind every page: the bookable service list,
//! the featured technician, the work gallery and the artist directory. All
//! of it is defined at process start and never mutated; pages treat these
//! functions as their catalog source and never ask for a refresh.

pub mod artists;
pub mod gallery;

pub use artists::{locations, nail_artists, specialties};
pub use gallery::{style_options, work_items};

use shared_types::{Service, Technician};

/// The five services offered by the booking wizard.
pub fn services() -> Vec<Service> {
    vec![
        Service {
            id: 1,
            name: "經典法式美甲".to_string(),
            duration_minutes: 75,
            price: 1580,
            description: "優雅白尖設計，展現指尖經典魅力".to_string(),
            popular: true,
        },
        Service {
            id: 2,
            name: "奶茶色系凝膠".to_string(),
            duration_minutes: 90,
            price: 1880,
            description: "溫柔奶茶色調，打造知性優雅氣質".to_string(),
            popular: false,
        },
        Service {
            id: 3,
            name: "裸粉漸層設計".to_string(),
            duration_minutes: 105,
            price: 2280,
            description: "細膩漸層技法，呈現自然光澤美感".to_string(),
            popular: false,
        },
        Service {
            id: 4,
            name: "珍珠光澤護理".to_string(),
            duration_minutes: 120,
            price: 2680,
            description: "深層護理配合珍珠光澤，奢華保養體驗".to_string(),
            popular: false,
        },
        Service {
            id: 5,
            name: "法式延甲造型".to_string(),
            duration_minutes: 135,
            price: 3280,
            description: "專業延甲技術，量身打造完美指型".to_string(),
            popular: false,
        },
    ]
}

/// The technician every booking is placed with.
pub fn featured_technician() -> Technician {
    Technician {
        id: 1,
        name: "林美美".to_string(),
        specialty: "法式美甲專家".to_string(),
        experience: "5年專業經驗".to_string(),
        rating: 4.9,
        avatar: "✨".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn catalog_has_five_services_with_unique_ids() {
        let services = services();

        assert_eq!(services.len(), 5);
        let mut ids: Vec<i32> = services.iter().map(|s| s.id).collect();
        ids.dedup();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn exactly_one_service_is_flagged_popular() {
        assert_eq!(services().iter().filter(|s| s.popular).count(), 1);
    }

    #[test]
    fn directory_is_deterministic() {
        assert_eq!(nail_artists(), nail_artists());
    }

    #[test]
    fn directory_lists_twenty_one_ranked_artists() {
        let artists = nail_artists();

        assert_eq!(artists.len(), 21);
        for (index, artist) in artists.iter().enumerate() {
            assert_eq!(artist.rank, index as i32 + 1);
        }
    }
}

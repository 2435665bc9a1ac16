use shared_types::{Difficulty, WorkItem};

/// Style filter chips on the gallery page.
pub fn style_options() -> Vec<String> {
    [
        "法式", "漸層", "光療", "水晶", "手繪", "貼鑽", "霧面", "珠光", "幾何", "花卉",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// The curated gallery pieces.
pub fn work_items() -> Vec<WorkItem> {
    vec![
        WorkItem {
            id: 1,
            title: "珍珠奶茶法式".to_string(),
            artist: "小雅美甲師".to_string(),
            price: "1200".to_string(),
            duration: "90分鐘".to_string(),
            tags: tags(&["法式", "琥珀", "創意"]),
            likes: 234,
            difficulty: Difficulty::Medium,
            featured: true,
            image: image_url(1604654894610),
        },
        WorkItem {
            id: 2,
            title: "夕陽漸層".to_string(),
            artist: "美美工作室".to_string(),
            price: "800".to_string(),
            duration: "60分鐘".to_string(),
            tags: tags(&["暈染", "光療"]),
            likes: 189,
            difficulty: Difficulty::Simple,
            featured: false,
            image: image_url(1515688594390),
        },
        WorkItem {
            id: 3,
            title: "花園手繪".to_string(),
            artist: "藝術美甲坊".to_string(),
            price: "1500".to_string(),
            duration: "120分鐘".to_string(),
            tags: tags(&["手繪", "花卉", "藝術"]),
            likes: 456,
            difficulty: Difficulty::Complex,
            featured: true,
            image: image_url(1522338242992),
        },
        WorkItem {
            id: 4,
            title: "極簡線條".to_string(),
            artist: "現代美甲".to_string(),
            price: "600".to_string(),
            duration: "45分鐘".to_string(),
            tags: tags(&["幾何", "霧面"]),
            likes: 123,
            difficulty: Difficulty::Simple,
            featured: false,
            image: image_url(1570172619644),
        },
        WorkItem {
            id: 5,
            title: "珠光漸變".to_string(),
            artist: "星光美甲".to_string(),
            price: "900".to_string(),
            duration: "75分鐘".to_string(),
            tags: tags(&["珠光", "漸層"]),
            likes: 278,
            difficulty: Difficulty::Medium,
            featured: false,
            image: image_url(1599351431202),
        },
        WorkItem {
            id: 6,
            title: "水晶貼鑽".to_string(),
            artist: "奢華美甲館".to_string(),
            price: "2000".to_string(),
            duration: "150分鐘".to_string(),
            tags: tags(&["貼鑽", "水晶", "奢華"]),
            likes: 567,
            difficulty: Difficulty::Complex,
            featured: true,
            image: image_url(1604654894610),
        },
    ]
}

fn image_url(photo_id: u64) -> String {
    format!(
        "https://images.unsplash.com/photo-{}?w=400&h=500&fit=crop",
        photo_id
    )
}

fn tags(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

use shared_types::NailArtist;

/// Specialty filter chips on the artist directory.
pub fn specialties() -> Vec<String> {
    ["法式", "手繪", "光療", "水晶", "漸層", "貼鑽", "幾何", "花卉"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Service-area filter chips.
pub fn locations() -> Vec<String> {
    ["台北", "新北", "桃園", "台中", "台南", "高雄"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// The TOP 21 directory: six curated profiles followed by fifteen entries
/// derived from a fixed name list. Everything is index-derived so the page
/// renders identically on the server and the hydrated client.
pub fn nail_artists() -> Vec<NailArtist> {
    let mut artists = curated_artists();
    artists.extend(derived_artists());
    artists
}

fn curated_artists() -> Vec<NailArtist> {
    vec![
        NailArtist {
            id: 1,
            rank: 1,
            name: "雅雅美甲工作室".to_string(),
            avatar: avatar_url(1494790108755),
            rating: 4.9,
            reviews: 1247,
            specialties: tags(&["法式", "手繪", "光療"]),
            location: "台北市信義區".to_string(),
            experience: "5年".to_string(),
            price_range: "800-2000".to_string(),
            portfolio: 156,
            followers: 12500,
            verified: true,
            featured: true,
            bio: "專精法式美甲與精緻手繪，為每位客人打造獨一無二的指尖藝術".to_string(),
            available_slots: 3,
            response_time: "通常在1小時內回覆".to_string(),
        },
        NailArtist {
            id: 2,
            rank: 2,
            name: "小美の指尖藝術".to_string(),
            avatar: avatar_url(1438761681033),
            rating: 4.8,
            reviews: 892,
            specialties: tags(&["漸層", "貼鑽", "水晶"]),
            location: "新北市板橋區".to_string(),
            experience: "3年".to_string(),
            price_range: "600-1800".to_string(),
            portfolio: 203,
            followers: 8900,
            verified: true,
            featured: false,
            bio: "IG風格美甲專家，擅長打造夢幻漸層與奢華貼鑽設計".to_string(),
            available_slots: 5,
            response_time: "通常在30分鐘內回覆".to_string(),
        },
        NailArtist {
            id: 3,
            rank: 3,
            name: "LUNA指甲沙龍".to_string(),
            avatar: avatar_url(1489424731084),
            rating: 4.9,
            reviews: 756,
            specialties: tags(&["幾何", "花卉", "光療"]),
            location: "台中市西屯區".to_string(),
            experience: "4年".to_string(),
            price_range: "700-1600".to_string(),
            portfolio: 189,
            followers: 15200,
            verified: true,
            featured: true,
            bio: "現代簡約風格專家，以幾何線條與花卉元素創造時尚美甲".to_string(),
            available_slots: 2,
            response_time: "通常在2小時內回覆".to_string(),
        },
        NailArtist {
            id: 4,
            rank: 4,
            name: "蜜桃美甲屋".to_string(),
            avatar: avatar_url(1534528741775),
            rating: 4.7,
            reviews: 643,
            specialties: tags(&["法式", "漸層"]),
            location: "桃園市中壢區".to_string(),
            experience: "2年".to_string(),
            price_range: "500-1200".to_string(),
            portfolio: 124,
            followers: 6800,
            verified: false,
            featured: false,
            bio: "溫柔甜美風格，專門打造適合日常的精緻美甲".to_string(),
            available_slots: 7,
            response_time: "通常在4小時內回覆".to_string(),
        },
        NailArtist {
            id: 5,
            rank: 5,
            name: "星河美甲藝術".to_string(),
            avatar: avatar_url(1517841905240),
            rating: 4.8,
            reviews: 521,
            specialties: tags(&["手繪", "貼鑽", "水晶"]),
            location: "台南市安平區".to_string(),
            experience: "6年".to_string(),
            price_range: "900-2500".to_string(),
            portfolio: 267,
            followers: 18700,
            verified: true,
            featured: true,
            bio: "頂級手繪藝術家，每一款設計都是獨家創作".to_string(),
            available_slots: 1,
            response_time: "通常在1小時內回覆".to_string(),
        },
        NailArtist {
            id: 6,
            rank: 6,
            name: "森林系美甲".to_string(),
            avatar: avatar_url(1524504388940),
            rating: 4.6,
            reviews: 478,
            specialties: tags(&["花卉", "幾何"]),
            location: "高雄市左營區".to_string(),
            experience: "3年".to_string(),
            price_range: "600-1400".to_string(),
            portfolio: 145,
            followers: 9200,
            verified: true,
            featured: false,
            bio: "自然系風格專家，擅長花卉與大自然元素設計".to_string(),
            available_slots: 4,
            response_time: "通常在2小時內回覆".to_string(),
        },
    ]
}

const MORE_ARTIST_NAMES: [&str; 15] = [
    "優雅指尖",
    "夢幻美甲",
    "時尚工坊",
    "精品沙龍",
    "典雅美學",
    "潮流指彩",
    "藝術美甲",
    "奢華工作室",
    "甜美指尖",
    "現代美學",
    "浪漫美甲",
    "風格工坊",
    "創意沙龍",
    "美學空間",
    "指尖藝廊",
];

fn derived_artists() -> Vec<NailArtist> {
    let specialties = specialties();
    let locations = locations();

    MORE_ARTIST_NAMES
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let i = index as i32;
            NailArtist {
                id: 7 + i,
                rank: 7 + i,
                name: (*name).to_string(),
                avatar: avatar_url(1494790108755 + index as u64),
                rating: 4.3 + f64::from(i % 5) * 0.1,
                reviews: 100 + (i * 37) % 400,
                specialties: specialties
                    .iter()
                    .cycle()
                    .skip(index)
                    .take(2 + index % 2)
                    .cloned()
                    .collect(),
                location: locations[index % locations.len()].clone(),
                experience: format!("{}年", 2 + i % 4),
                price_range: format!("{}-{}", 500 + (i * 50) % 300, 1200 + (i * 100) % 800),
                portfolio: 50 + (i * 23) % 150,
                followers: 1000 + (i * 613) % 10000,
                verified: index % 3 != 0,
                featured: index < 3,
                bio: "專業美甲師，致力於為每位客人打造完美指尖造型".to_string(),
                available_slots: 1 + (i * 3) % 8,
                response_time: "通常在1-4小時內回覆".to_string(),
            }
        })
        .collect()
}

fn avatar_url(photo_id: u64) -> String {
    format!(
        "https://images.unsplash.com/photo-{}?w=150&h=150&fit=crop&crop=face",
        photo_id
    )
}

fn tags(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use shared_types::NailArtist;
use thaw::*;

use crate::catalog;

fn rank_badge_class(rank: i32) -> &'static str {
    if rank <= 3 {
        "artist-card__rank artist-card__rank--gold"
    } else if rank <= 10 {
        "artist-card__rank artist-card__rank--silver"
    } else {
        "artist-card__rank artist-card__rank--bronze"
    }
}

fn rank_icon(rank: i32) -> String {
    match rank {
        1 => "👑".to_string(),
        2 => "🥈".to_string(),
        3 => "🥉".to_string(),
        _ => "⭐".to_string(),
    }
}

/// The TOP 21 artist directory: searchable, specialty-filterable ranked
/// cards, each with a booking CTA modal.
#[component]
pub fn ArtistsPage() -> impl IntoView {
    let search_query = RwSignal::new(String::new());
    let show_filters = RwSignal::new(false);
    let selected_specialties = RwSignal::new(Vec::<String>::new());
    let selected_artist = RwSignal::new(Option::<NailArtist>::None);

    let filtered_artists = Memo::new(move |_| {
        let query = search_query.get().trim().to_lowercase();
        let specialties = selected_specialties.get();

        catalog::nail_artists()
            .into_iter()
            .filter(|artist| {
                query.is_empty()
                    || artist.name.to_lowercase().contains(&query)
                    || artist.location.to_lowercase().contains(&query)
            })
            .filter(|artist| {
                specialties.is_empty()
                    || artist.specialties.iter().any(|s| specialties.contains(s))
            })
            .collect::<Vec<_>>()
    });

    let toggle_specialty = move |specialty: String| {
        selected_specialties.update(|selected| {
            if let Some(position) = selected.iter().position(|s| *s == specialty) {
                selected.remove(position);
            } else {
                selected.push(specialty);
            }
        });
    };

    view! {
        <div class="artists-page">
            <div class="artists-page__hero">
                <div class="artists-page__hero-icon">"✨"</div>
                <h1>
                    "精選美甲師"
                    <span class="artists-page__hero-accent">"TOP21"</span>
                </h1>
                <p>"嚴選全台最優秀的美甲藝術家，每一位都是指尖藝術的專家"</p>
                <div class="artists-page__hero-badges">
                    <span>"🏆 專業認證"</span>
                    <span>"⭐ 五星評價"</span>
                    <span>"✔ 身份驗證"</span>
                </div>
            </div>

            <div class="artists-page__search">
                <div class="artists-page__search-bar">
                    <Input
                        class="artists-page__search-input"
                        placeholder="搜尋美甲師名稱或地區..."
                        value=search_query
                    />
                    <button
                        class="artists-page__filter-toggle"
                        on:click=move |_| show_filters.set(!show_filters.get())
                    >
                        "篩選器"
                    </button>
                </div>

                {move || {
                    if !show_filters.get() {
                        return view! {}.into_any();
                    }

                    view! {
                        <div class="artists-page__filter-panel">
                            <div class="artists-page__filter-group">
                                <label>"專長風格"</label>
                                <div class="artists-page__filter-chips">
                                    {catalog::specialties()
                                        .into_iter()
                                        .map(|specialty| {
                                            let for_click = specialty.clone();
                                            let for_class = specialty.clone();

                                            view! {
                                                <button
                                                    class=move || {
                                                        if selected_specialties.get().contains(&for_class) {
                                                            "artists-page__chip artists-page__chip--selected"
                                                        } else {
                                                            "artists-page__chip"
                                                        }
                                                    }
                                                    on:click=move |_| toggle_specialty(for_click.clone())
                                                >
                                                    {specialty}
                                                </button>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            </div>
                            <div class="artists-page__filter-group">
                                <label>"服務地區"</label>
                                <div class="artists-page__filter-chips">
                                    {catalog::locations()
                                        .into_iter()
                                        .map(|location| {
                                            view! {
                                                <button class="artists-page__chip">{location}</button>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            </div>
                        </div>
                    }
                    .into_any()
                }}
            </div>

            <div class="artists-page__grid">
                {move || {
                    filtered_artists
                        .get()
                        .into_iter()
                        .map(|artist| {
                            let artist_for_click = artist.clone();
                            let full_stars = artist.rating.floor() as usize;

                            view! {
                                <div class="artist-card">
                                    <div class=rank_badge_class(artist.rank)>
                                        {if artist.rank <= 10 {
                                            format!("#{}", artist.rank)
                                        } else {
                                            rank_icon(artist.rank)
                                        }}
                                    </div>

                                    {artist
                                        .featured
                                        .then(|| {
                                            view! {
                                                <span class="artist-card__featured">"★ 精選推薦"</span>
                                            }
                                        })}

                                    <div class="artist-card__header">
                                        <div class="artist-card__avatar-wrapper">
                                            <img src=artist.avatar.clone() alt=artist.name.clone()/>
                                            {artist
                                                .verified
                                                .then(|| {
                                                    view! {
                                                        <span class="artist-card__verified">"✔"</span>
                                                    }
                                                })}
                                        </div>
                                        <h3>{artist.name.clone()}</h3>
                                        <p class="artist-card__bio">{artist.bio.clone()}</p>
                                        <div class="artist-card__rating">
                                            <span class="artist-card__stars">
                                                {(0..5)
                                                    .map(|i| if i < full_stars { "★" } else { "☆" })
                                                    .collect::<String>()}
                                            </span>
                                            <strong>{format!("{:.1}", artist.rating)}</strong>
                                            <span class="artist-card__reviews">
                                                {format!("({}則評價)", artist.reviews)}
                                            </span>
                                        </div>
                                    </div>

                                    <div class="artist-card__specialties">
                                        {artist
                                            .specialties
                                            .iter()
                                            .map(|specialty| {
                                                view! {
                                                    <span class="artist-card__specialty">
                                                        {specialty.clone()}
                                                    </span>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>

                                    <div class="artist-card__stats">
                                        <div>
                                            <p>"作品集"</p>
                                            <strong>{artist.portfolio}</strong>
                                        </div>
                                        <div>
                                            <p>"粉絲"</p>
                                            <strong>
                                                {format!("{:.1}K", f64::from(artist.followers) / 1000.0)}
                                            </strong>
                                        </div>
                                    </div>

                                    <div class="artist-card__info">
                                        <div class="artist-card__info-row">
                                            <span>{artist.location.clone()}</span>
                                            <span>{format!("{}經驗", artist.experience)}</span>
                                        </div>
                                        <div class="artist-card__info-row">
                                            <span>{format!("NT$ {}", artist.price_range)}</span>
                                            <span class="artist-card__slots">
                                                {format!("還有{}個時段", artist.available_slots)}
                                            </span>
                                        </div>
                                        <p class="artist-card__response">{artist.response_time.clone()}</p>
                                    </div>

                                    <div class="artist-card__actions">
                                        <button
                                            class="artist-card__book"
                                            on:click=move |_| {
                                                selected_artist.set(Some(artist_for_click.clone()))
                                            }
                                        >
                                            "立即預約"
                                        </button>
                                        <div class="artist-card__secondary-actions">
                                            <button>"聯絡"</button>
                                            <button>"收藏"</button>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <BookingCtaModal selected_artist=selected_artist/>
        </div>
    }
}

/// Small confirmation dialog between the directory and the booking wizard.
#[component]
fn BookingCtaModal(selected_artist: RwSignal<Option<NailArtist>>) -> impl IntoView {
    let navigate = use_navigate();

    view! {
        {move || {
            let Some(artist) = selected_artist.get() else {
                return view! {}.into_any();
            };

            let navigate_booking = navigate.clone();
            let navigate_gallery = navigate.clone();

            view! {
                <div
                    class="booking-cta-modal__overlay"
                    on:click=move |_| selected_artist.set(None)
                >
                    <div
                        class="booking-cta-modal"
                        on:click=move |ev| ev.stop_propagation()
                    >
                        <img src=artist.avatar.clone() alt=artist.name.clone()/>
                        <h3>{artist.name.clone()}</h3>
                        <p>"準備好預約您的專屬美甲時光了嗎？"</p>
                        <button
                            class="booking-cta-modal__primary"
                            on:click=move |_| {
                                navigate_booking("/booking", Default::default());
                            }
                        >
                            "選擇預約時間"
                        </button>
                        <button
                            class="booking-cta-modal__secondary"
                            on:click=move |_| {
                                navigate_gallery("/", Default::default());
                            }
                        >
                            "查看作品集"
                        </button>
                        <button
                            class="booking-cta-modal__cancel"
                            on:click=move |_| selected_artist.set(None)
                        >
                            "取消"
                        </button>
                    </div>
                </div>
            }
            .into_any()
        }}
    }
}

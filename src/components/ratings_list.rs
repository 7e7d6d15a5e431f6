use leptos::*;
use crate::models::rating::Rating;

#[component]
pub fn RatingsList(ratings: Vec<Rating>) -> impl IntoView {
    view! {
        <div>
            <h3>{ "Ratings" }</h3>
            <ul>
                {
                    ratings.into_iter().map(|rating| {
                        view! {
                            <li>{ format!("{}/5 - {}", rating.stars.get(), rating.comment) }</li>
                        }
                    }).collect::<Vec<_>>()
                }
            </ul>
        </div>
    }
}

use yew::prelude::*;

use super::browser::{random, use_window_event, viewport_size};
use crate::starfield::{generate_meteors, generate_stars, Meteor, Star};

fn fresh_stars() -> Vec<Star> {
    let (width, height) = viewport_size();
    generate_stars(width, height, random)
}

#[function_component(StarBackground)]
pub fn star_background() -> Html {
    let stars = use_state(fresh_stars);
    let meteors = use_state(|| generate_meteors(random));

    {
        let stars = stars.clone();
        use_window_event("resize", Callback::from(move |_: ()| stars.set(fresh_stars())));
    }

    html! {
        <div class="star-background" aria-hidden="true">
            { for stars.iter().map(|star: &Star| html! {
                <div key={star.id} class="star" style={star.style()}></div>
            }) }
            { for meteors.iter().map(|meteor: &Meteor| html! {
                <div key={meteor.id} class="meteor" style={meteor.style()}></div>
            }) }
        </div>
    }
}

use crate::talks::placeholder::Paragraph;
use crate::utils::{star_rating, SPACER};
use yew::prelude::*;

pub fn spacer() -> Html {
    html! { <span class="spacer" aria-hidden="true">{SPACER}</span> }
}

pub fn stars(rating: u8) -> Html {
    html! {
        <span class="rating" title={format!("{rating} of 5")}>{star_rating(rating)}</span>
    }
}

/// One `<p>` per paragraph, lines inside it separated by `<br/>`.
pub fn paragraphs(paragraphs: &[Paragraph]) -> Html {
    html! {
        <>
        { for paragraphs.iter().map(|lines| html! {
            <p>
                { for lines.iter().enumerate().map(|(i, line)| html! {
                    <>
                        if i > 0 { <br/> }
                        { line.clone() }
                    </>
                })}
            </p>
        })}
        </>
    }
}

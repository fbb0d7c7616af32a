use crate::config::Config;
use crate::talks::api::GlooTransport;
use crate::talks::markup::{paragraphs, spacer, stars};
use crate::talks::pipeline::{BrowserSpawner, Orchestrator};
use crate::talks::placeholder::{ListRoot, Placeholder, Region, TimelinePreview};
use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct WatchLogProps {
    pub config: Config,
}

#[derive(Properties, PartialEq)]
pub struct TalkCardProps {
    pub placeholder: Placeholder,
}

#[derive(Properties, PartialEq)]
pub struct TimelineFooterProps {
    pub preview: TimelinePreview,
}

#[function_component(WatchLog)]
pub fn watch_log(props: &WatchLogProps) -> Html {
    let redraw = use_force_update();
    let root = use_memo((), move |_| {
        ListRoot::new(Callback::from(move |_| redraw.force_update()))
    });

    // Runs once per mount: load the log, then enrich every entry.
    {
        let root = (*root).clone();
        let config = props.config.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let orchestrator = Orchestrator::new(config, GlooTransport, BrowserSpawner);
                if let Err(e) = orchestrator.run(&root).await {
                    log::error!("{}", e);
                }
            });
            || ()
        });
    }

    let blocks = root.blocks();

    html! {
        <section class="watch-log">
            <header class="watch-log-header">
                <h1>{&props.config.app_name}</h1>
                <p class="talk-count">{format!("{} talks watched", blocks.len())}</p>
            </header>
            if root.is_empty() {
                <p class="loading">{"Loading watch log..."}</p>
            }
            <ul class="talks">
                { for blocks.into_iter().map(|placeholder| {
                    let key = placeholder.id().to_string();
                    html! { <TalkCard key={key} placeholder={placeholder} /> }
                })}
            </ul>
        </section>
    }
}

#[function_component(TalkCard)]
pub fn talk_card(props: &TalkCardProps) -> Html {
    let redraw = use_force_update();
    let rendered = props.placeholder.version();

    // Enrichment redraws this card only, never the whole list.
    use_effect_with(props.placeholder.clone(), move |placeholder| {
        placeholder.subscribe(Callback::from({
            let redraw = redraw.clone();
            move |_| redraw.force_update()
        }));
        // An update may have landed between rendering and subscribing.
        if placeholder.version() != rendered {
            redraw.force_update();
        }
        let placeholder = placeholder.clone();
        move || placeholder.unsubscribe()
    });

    let entry = props.placeholder.entry();
    let regions = props.placeholder.regions();

    let title = match &regions.title {
        Region::Enriched(link) => html! {
            <>
                <a href={link.href.clone()} target="_blank">{&link.title}</a>
                if let Some(subtitle) = &link.subtitle {
                    <span class="subtitle">{format!(" – {subtitle}")}</span>
                }
            </>
        },
        Region::Skeleton => html! {
            <a href={entry.id.clone()}>{&entry.id}</a>
        },
    };

    let thumbnail = match regions.thumbnail.enriched() {
        Some(url) => html! {
            <img src={url.clone()} alt={format!("Thumbnail of {}", entry.id)} loading="lazy" />
        },
        None => html! {},
    };

    let metadata = match &regions.metadata {
        Region::Enriched(line) => html! {
            <dl>
                <dt>{"👥"}</dt><dd>{&line.speakers}</dd>
                <dt>{"📅"}</dt><dd>{&line.series}</dd>
                <dt>{"⏱️"}</dt><dd>{&line.duration}</dd>
            </dl>
        },
        Region::Skeleton => html! {},
    };

    let description = match &regions.description {
        Region::Enriched(text) => paragraphs(text),
        Region::Skeleton => html! {},
    };

    let timeline = match &regions.timeline {
        Region::Enriched(preview) => html! { <TimelineFooter preview={preview.clone()} /> },
        Region::Skeleton => html! {},
    };

    html! {
        <li class={classes!("talk", regions.is_skeleton().then_some("skeleton"))}>
            <h2 class="talk-heading">
                <span class="title">{title}</span>
                {spacer()}
                {stars(entry.rating)}
                {spacer()}
                <span class="comment">{&entry.comment}</span>
            </h2>
            <div class="thumbnail">{thumbnail}</div>
            <div class="metadata">{metadata}</div>
            <div class="description">{description}</div>
            <dl class="local">
                <dt>{"Watched"}</dt><dd>{&entry.watched_at}</dd>
                <dt>{"Id"}</dt><dd><code>{&entry.id}</code></dd>
            </dl>
            <footer class="timeline">{timeline}</footer>
        </li>
    }
}

/// Timeline strip linking into the talk. Hovering it points the link at the
/// hovered position.
#[function_component(TimelineFooter)]
pub fn timeline_footer(props: &TimelineFooterProps) -> Html {
    let seek = use_state(|| None::<u64>);

    // Geometry is measured on every event, layout and zoom can change between them.
    let on_pointer = {
        let seek = seek.clone();
        let target = props.preview.target.clone();
        Callback::from(move |e: PointerEvent| {
            let image: Element = e.target_unchecked_into();
            let rect = image.get_bounding_client_rect();
            seek.set(Some(target.seconds_at(
                e.client_x() as f64,
                rect.left(),
                rect.width(),
            )));
        })
    };

    html! {
        <a href={props.preview.target.href(*seek)} target="_blank" class="timeline-link">
            <img
                src={props.preview.image_url.clone()}
                alt="Timeline preview"
                onpointerenter={on_pointer.clone()}
                onpointermove={on_pointer}
            />
        </a>
    }
}

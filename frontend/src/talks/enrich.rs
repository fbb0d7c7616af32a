use crate::models::RemoteDetail;
use crate::talks::api::{FetchError, Transport};
use crate::talks::placeholder::{
    MetadataLine, Placeholder, Regions, SeekTarget, TimelinePreview, TitleLink,
};
use crate::utils::{join_speakers, pretty_duration, split_paragraphs};
use log::{debug, error, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Non-2xx answer from the catalog
    Http,
    /// Request never completed
    Network,
    /// Answer did not match the detail schema
    Malformed,
}

impl From<&FetchError> for FailureKind {
    fn from(error: &FetchError) -> Self {
        match error {
            FetchError::Status { .. } => FailureKind::Http,
            FetchError::Transport(_) => FailureKind::Network,
            FetchError::Malformed(_) => FailureKind::Malformed,
        }
    }
}

/// How an enrichment task ended. Both variants are successful completions,
/// an absorbed failure leaves the placeholder in its skeleton state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOutcome {
    Enriched,
    Absorbed(FailureKind),
}

/// Fetches the detail at `url` and merges it into `placeholder`.
///
/// Failures stop here: they are logged and reported through the outcome,
/// never returned, so one bad lookup cannot disturb any other entry.
pub async fn enrich<T: Transport>(
    transport: T,
    url: String,
    placeholder: Placeholder,
) -> TaskOutcome {
    match transport.get_json::<RemoteDetail>(&url).await {
        Ok(detail) => {
            if detail.id != placeholder.id() {
                debug!(
                    "Catalog answered {} for {}, merging anyway",
                    detail.id,
                    placeholder.id()
                );
            }
            placeholder.update(|regions| merge_detail(regions, &detail));
            TaskOutcome::Enriched
        }
        Err(e) => {
            let kind = FailureKind::from(&e);
            match kind {
                FailureKind::Http => warn!("{}", e),
                _ => error!("Unexpected failure enriching {}: {}", placeholder.id(), e),
            }
            TaskOutcome::Absorbed(kind)
        }
    }
}

/// Writes `detail` into the skeleton regions. Optional parts of the detail
/// leave their region untouched.
pub fn merge_detail(regions: &mut Regions, detail: &RemoteDetail) {
    let mut filled = regions.title.fill(TitleLink {
        href: detail.canonical_url.clone(),
        title: detail.title.clone(),
        subtitle: detail.subtitle.clone().filter(|s| !s.is_empty()),
    });

    filled &= regions.metadata.fill(MetadataLine {
        speakers: join_speakers(&detail.speakers),
        series: detail.series_title.clone(),
        duration: pretty_duration(detail.duration_seconds),
    });

    if let Some(thumbnail_url) = &detail.thumbnail_url {
        filled &= regions.thumbnail.fill(thumbnail_url.clone());
    }

    if let Some(description) = &detail.description {
        filled &= regions.description.fill(split_paragraphs(description));
    }

    if let Some(timeline_url) = &detail.timeline_preview_url {
        filled &= regions.timeline.fill(TimelinePreview {
            image_url: timeline_url.clone(),
            target: SeekTarget {
                canonical_url: detail.canonical_url.clone(),
                duration_seconds: detail.duration_seconds,
            },
        });
    }

    if !filled {
        warn!("Detail for {} was merged more than once", detail.id);
    }
}

impl SeekTarget {
    /// Maps a pointer position over the timeline image to a playback offset.
    /// `left` and `width` must be measured at event time.
    pub fn seconds_at(&self, pointer_x: f64, left: f64, width: f64) -> u64 {
        if width.is_nan() || width <= 0.0 {
            return 0;
        }
        let duration = self.duration_seconds as f64;
        let seconds = (duration * (pointer_x - left) / width).floor();
        seconds.clamp(0.0, duration) as u64
    }

    pub fn href(&self, seconds: Option<u64>) -> String {
        match seconds {
            Some(seconds) => format!("{}#t={}", self.canonical_url, seconds),
            None => self.canonical_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail() -> RemoteDetail {
        RemoteDetail {
            id: "abc".to_string(),
            title: "Talk".to_string(),
            subtitle: Some("Sub".to_string()),
            description: Some("A\nB\n\nC".to_string()),
            speakers: vec!["Alice".to_string(), "Bob".to_string()],
            duration_seconds: 120,
            thumbnail_url: Some("https://cdn/thumb.jpg".to_string()),
            timeline_preview_url: Some("https://cdn/timeline.jpg".to_string()),
            canonical_url: "https://media/v/abc".to_string(),
            series_title: "36C3".to_string(),
        }
    }

    fn target(duration_seconds: u64) -> SeekTarget {
        SeekTarget {
            canonical_url: "https://media/v/abc".to_string(),
            duration_seconds,
        }
    }

    #[test]
    fn merge_fills_every_region() {
        let mut regions = Regions::default();
        merge_detail(&mut regions, &detail());

        let title = regions.title.enriched().unwrap();
        assert_eq!(title.href, "https://media/v/abc");
        assert_eq!(title.title, "Talk");
        assert_eq!(title.subtitle.as_deref(), Some("Sub"));

        let metadata = regions.metadata.enriched().unwrap();
        assert_eq!(metadata.speakers, "Alice, Bob");
        assert_eq!(metadata.series, "36C3");
        assert_eq!(metadata.duration, "00:02:00");

        assert_eq!(
            regions.thumbnail.enriched().map(String::as_str),
            Some("https://cdn/thumb.jpg")
        );
        assert_eq!(
            regions.description.enriched().unwrap(),
            &vec![vec!["A".to_string(), "B".to_string()], vec!["C".to_string()]]
        );

        let timeline = regions.timeline.enriched().unwrap();
        assert_eq!(timeline.image_url, "https://cdn/timeline.jpg");
        assert_eq!(timeline.target, target(120));
    }

    #[test]
    fn merge_leaves_absent_parts_as_skeleton() {
        let mut regions = Regions::default();
        let sparse = RemoteDetail {
            subtitle: None,
            description: None,
            thumbnail_url: None,
            timeline_preview_url: None,
            ..detail()
        };
        merge_detail(&mut regions, &sparse);

        assert!(regions.title.enriched().unwrap().subtitle.is_none());
        assert!(regions.metadata.is_enriched());
        assert!(!regions.thumbnail.is_enriched());
        assert!(!regions.description.is_enriched());
        assert!(!regions.timeline.is_enriched());
    }

    #[test]
    fn second_merge_does_not_overwrite() {
        let mut regions = Regions::default();
        merge_detail(&mut regions, &detail());
        let other = RemoteDetail {
            title: "Other".to_string(),
            ..detail()
        };
        merge_detail(&mut regions, &other);

        assert_eq!(regions.title.enriched().unwrap().title, "Talk");
    }

    #[test]
    fn midpoint_of_two_minute_talk_seeks_to_sixty() {
        let target = target(120);
        let seconds = target.seconds_at(150.0, 100.0, 100.0);
        assert_eq!(seconds, 60);
        assert_eq!(target.href(Some(seconds)), "https://media/v/abc#t=60");
    }

    #[test]
    fn seek_floors_and_clamps() {
        let target = target(100);
        assert_eq!(target.seconds_at(33.3, 0.0, 100.0), 33);
        assert_eq!(target.seconds_at(-20.0, 0.0, 100.0), 0);
        assert_eq!(target.seconds_at(500.0, 0.0, 100.0), 100);
    }

    #[test]
    fn seek_multiplies_before_dividing() {
        assert_eq!(target(49).seconds_at(1.0, 0.0, 49.0), 1);
        assert_eq!(target(3600).seconds_at(13.0, 0.0, 24.0), 1950);
        assert_eq!(target(3600).seconds_at(113.0, 100.0, 24.0), 1950);
    }

    #[test]
    fn seek_without_geometry_or_duration_is_zero() {
        assert_eq!(target(120).seconds_at(10.0, 0.0, 0.0), 0);
        assert_eq!(target(0).seconds_at(50.0, 0.0, 100.0), 0);
    }

    #[test]
    fn href_without_seek_has_no_fragment() {
        assert_eq!(target(120).href(None), "https://media/v/abc");
    }

    #[test]
    fn failure_kinds_follow_fetch_errors() {
        let status = FetchError::Status {
            status: 404,
            status_text: "Not Found".to_string(),
            url: "u".to_string(),
        };
        assert_eq!(FailureKind::from(&status), FailureKind::Http);

        let network = FetchError::Transport(gloo_net::Error::GlooError("down".to_string()));
        assert_eq!(FailureKind::from(&network), FailureKind::Network);

        let malformed = FetchError::from(serde_json::from_str::<u8>("x").unwrap_err());
        assert_eq!(FailureKind::from(&malformed), FailureKind::Malformed);
    }
}

/// Placeholder image component
///
/// Fetches one random landscape photo from Unsplash for its query and
/// shows a loading box, an error box, or the photo. A new fetch starts
/// whenever the query, the size or the access key changes; results of
/// superseded fetches are dropped.
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use iced::widget::{container, image, text};
use iced::{Background, Color, ContentFit, Element, Length, Task, Theme};

use super::rendered::{error_text, Rendered, LOADING_TEXT};
use crate::config::UnsplashConfig;
use crate::context::{read_access_key, ConfigurationError, Scope};
use crate::fetch::{fetch_placeholder, FetchError, FetchState, LoadedImage, RequestParams, Rerun, Ticket};
use crate::unsplash::SearchConnector;

/// Background of the loading and error boxes
const BOX_BACKGROUND: Color = Color::from_rgb(0.941, 0.941, 0.941);

/// Text color of the error box
const ERROR_COLOR: Color = Color::from_rgb(1.0, 0.0, 0.0);

/// Caller-facing inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderProps {
    pub params: RequestParams,
    pub alt: String,
    /// Extra classes appended to the state's base class
    pub class_name: String,
}

impl Default for PlaceholderProps {
    fn default() -> Self {
        Self {
            params: RequestParams::default(),
            alt: "Placeholder image".to_string(),
            class_name: String::new(),
        }
    }
}

impl PlaceholderProps {
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.params.query = query.into();
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.params.width = width;
        self.params.height = height;
        self
    }

    pub fn params(mut self, params: RequestParams) -> Self {
        self.params = params;
        self
    }

    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = alt.into();
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }
}

/// Where a placeholder gets its access key from
#[derive(Debug, Clone)]
pub enum KeySource {
    /// Nearest `AccessKeyProvider` above this scope
    Provider(Arc<Scope>),
    /// Configuration handed over directly, e.g. loaded from the environment
    Injected(UnsplashConfig),
}

impl KeySource {
    /// The usable configuration, or `None` when the key is missing.
    ///
    /// Fails only when a provider is expected but none is in scope.
    pub fn resolve(&self) -> Result<Option<Arc<UnsplashConfig>>, ConfigurationError> {
        let config = match self {
            KeySource::Provider(scope) => read_access_key(scope)?,
            KeySource::Injected(config) => Arc::new(config.clone()),
        };

        Ok(config.access_key().is_some().then_some(config))
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    /// A fetch attempt resolved
    Fetched {
        ticket: Ticket,
        outcome: Result<LoadedImage, FetchError>,
    },
}

/// Everything that identifies a fetch
#[derive(Debug, Clone, PartialEq)]
struct FetchKey {
    config: Option<Arc<UnsplashConfig>>,
    params: RequestParams,
}

type PendingFetch = Pin<Box<dyn Future<Output = Message> + Send>>;

pub struct PlaceholderImage {
    props: PlaceholderProps,
    config: Option<Arc<UnsplashConfig>>,
    connector: SearchConnector,
    rerun: Rerun<FetchKey>,
    state: FetchState,
}

impl PlaceholderImage {
    /// Create a placeholder and start its first fetch.
    ///
    /// Returns `ConfigurationError` when `source` names a provider that is
    /// not in scope; no state exists in that case.
    pub fn new(
        props: PlaceholderProps,
        source: KeySource,
        connector: SearchConnector,
    ) -> Result<(Self, Task<Message>), ConfigurationError> {
        let (placeholder, pending) = Self::build(props, source, connector)?;
        Ok((placeholder, into_task(pending)))
    }

    fn build(
        props: PlaceholderProps,
        source: KeySource,
        connector: SearchConnector,
    ) -> Result<(Self, Option<PendingFetch>), ConfigurationError> {
        let config = source.resolve()?;

        let mut placeholder = Self {
            props,
            config,
            connector,
            rerun: Rerun::new(),
            state: FetchState::Loading,
        };
        let pending = placeholder.refresh();

        Ok((placeholder, pending))
    }

    pub fn props(&self) -> &PlaceholderProps {
        &self.props
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    /// The current view model
    pub fn rendered(&self) -> Rendered {
        Rendered::from_state(&self.state, &self.props)
    }

    /// Replace all props; refetches if query or size changed
    pub fn set_props(&mut self, props: PlaceholderProps) -> Task<Message> {
        self.props = props;
        into_task(self.refresh())
    }

    pub fn set_query(&mut self, query: impl Into<String>) -> Task<Message> {
        let props = self.props.clone().query(query);
        self.set_props(props)
    }

    pub fn set_size(&mut self, width: u32, height: u32) -> Task<Message> {
        let props = self.props.clone().size(width, height);
        self.set_props(props)
    }

    /// Switch to a different key source; refetches if the key changed
    pub fn set_key_source(&mut self, source: KeySource) -> Result<Task<Message>, ConfigurationError> {
        self.config = source.resolve()?;
        Ok(into_task(self.refresh()))
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Fetched { ticket, outcome } => {
                self.settle(ticket, outcome);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let width = self.props.params.width;
        let height = self.props.params.height;

        match &self.state {
            FetchState::Loaded(loaded) => image::Image::<image::Handle>::new(loaded.handle.clone())
                .width(Length::Fixed(width as f32))
                .height(Length::Fixed(height as f32))
                .content_fit(ContentFit::Cover)
                .into(),
            FetchState::Loading => placeholder_box(text(LOADING_TEXT).into(), width, height),
            FetchState::Error(message) => {
                placeholder_box(text(error_text(message)).color(ERROR_COLOR).into(), width, height)
            }
        }
    }

    /// Start a fetch if the inputs changed since the last one
    fn refresh(&mut self) -> Option<PendingFetch> {
        let key = FetchKey {
            config: self.config.clone(),
            params: self.props.params.clone(),
        };

        let ticket = self.rerun.observe(key)?;

        // Any previous image is hidden as soon as a new fetch begins
        self.state = FetchState::Loading;

        let Some(config) = self.config.clone() else {
            tracing::warn!("Placeholder fetch #{} skipped: access key missing", ticket.sequence());
            self.state = FetchState::from_outcome(Err(FetchError::MissingCredential));
            return None;
        };

        let search = (self.connector)(&config);
        let params = self.props.params.clone();

        tracing::info!(
            "Fetching placeholder #{} for {:?} at {}x{}",
            ticket.sequence(),
            params.query,
            params.width,
            params.height
        );

        Some(Box::pin(async move {
            let outcome = fetch_placeholder(search.as_ref(), &params).await;
            Message::Fetched { ticket, outcome }
        }))
    }

    fn settle(&mut self, ticket: Ticket, outcome: Result<LoadedImage, FetchError>) {
        if !self.rerun.is_current(ticket) {
            tracing::debug!("Discarding superseded placeholder fetch #{}", ticket.sequence());
            return;
        }

        match &outcome {
            Ok(loaded) => tracing::info!("Placeholder #{} loaded: {}", ticket.sequence(), loaded.url),
            Err(err) => tracing::warn!("Placeholder #{} failed: {:?}", ticket.sequence(), err),
        }

        self.state = FetchState::from_outcome(outcome);
    }
}

fn into_task(pending: Option<PendingFetch>) -> Task<Message> {
    match pending {
        Some(fetch) => Task::perform(fetch, std::convert::identity),
        None => Task::none(),
    }
}

/// Fixed-size grey box with centered content
fn placeholder_box(content: Element<'_, Message>, width: u32, height: u32) -> Element<'_, Message> {
    container(content)
        .center_x(Length::Fixed(width as f32))
        .center_y(Length::Fixed(height as f32))
        .style(|_theme: &Theme| container::Style {
            background: Some(Background::Color(BOX_BACKGROUND)),
            ..container::Style::default()
        })
        .into()
}

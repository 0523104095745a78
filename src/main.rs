use iced::widget::{button, column, container, row, text, text_input, Row};
use iced::{Alignment, Element, Length, Task, Theme};
use tracing_subscriber::EnvFilter;

use unsplash_placeholder::config::ACCESS_KEY_VAR;
use unsplash_placeholder::ui::{self, KeySource, PlaceholderImage, PlaceholderProps};
use unsplash_placeholder::{unsplash_connector, AccessKeyProvider, Scope, UnsplashConfig};

/// Queries shown when the gallery opens
const STARTING_QUERIES: [&str; 3] = ["mountains", "ocean", "forest"];

const STARTING_WIDTH: u32 = 320;
const STARTING_HEIGHT: u32 = 240;

/// Main application state
struct Gallery {
    /// One placeholder per card
    placeholders: Vec<PlaceholderImage>,
    /// Contents of the query field
    query: String,
    width: String,
    height: String,
    /// Status message to display to the user
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    QueryChanged(String),
    WidthChanged(String),
    HeightChanged(String),
    /// Apply the query and size fields to every card
    Apply,
    /// Message for the placeholder at the given index
    Placeholder(usize, ui::Message),
}

impl Gallery {
    fn new() -> (Self, Task<Message>) {
        let config = UnsplashConfig::from_env();
        if config.access_key().is_none() {
            tracing::warn!("{} is not set; placeholders will show an error", ACCESS_KEY_VAR);
        }

        // The first cards read their key from a provider scope, the last one
        // has the configuration injected directly.
        let scope = AccessKeyProvider::provide_config(&Scope::root(), config.clone());
        let connector = unsplash_connector();

        let mut placeholders = Vec::new();
        let mut tasks = Vec::new();

        for (index, query) in STARTING_QUERIES.iter().enumerate() {
            let source = if index + 1 < STARTING_QUERIES.len() {
                KeySource::Provider(scope.clone())
            } else {
                KeySource::Injected(config.clone())
            };
            let props = PlaceholderProps::default()
                .query(*query)
                .size(STARTING_WIDTH, STARTING_HEIGHT)
                .alt(format!("Random photo of {}", query))
                .class_name("gallery-card");

            // A missing provider is a wiring bug in this binary
            let (placeholder, task) = PlaceholderImage::new(props, source, connector.clone())
                .expect("Gallery placeholders must be created inside an AccessKeyProvider");

            placeholders.push(placeholder);
            tasks.push(task.map(move |m| Message::Placeholder(index, m)));
        }

        tracing::info!("Placeholder gallery started with {} cards", placeholders.len());

        (
            Gallery {
                placeholders,
                query: String::new(),
                width: STARTING_WIDTH.to_string(),
                height: STARTING_HEIGHT.to_string(),
                status: "Ready.".to_string(),
            },
            Task::batch(tasks),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QueryChanged(query) => {
                self.query = query;
                Task::none()
            }
            Message::WidthChanged(width) => {
                self.width = width;
                Task::none()
            }
            Message::HeightChanged(height) => {
                self.height = height;
                Task::none()
            }
            Message::Apply => {
                let (width, height) = match (parse_dimension(&self.width), parse_dimension(&self.height)) {
                    (Some(width), Some(height)) => (width, height),
                    _ => {
                        self.status = "Width and height must be positive whole numbers.".to_string();
                        return Task::none();
                    }
                };

                let query = self.query.trim().to_string();
                let mut tasks = Vec::new();

                for (index, placeholder) in self.placeholders.iter_mut().enumerate() {
                    let mut props = placeholder.props().clone().size(width, height);
                    if !query.is_empty() {
                        props = props.query(query.clone());
                    }
                    tasks.push(
                        placeholder
                            .set_props(props)
                            .map(move |m| Message::Placeholder(index, m)),
                    );
                }

                self.status = format!("Showing {}x{} placeholders.", width, height);
                Task::batch(tasks)
            }
            Message::Placeholder(index, message) => match self.placeholders.get_mut(index) {
                Some(placeholder) => placeholder
                    .update(message)
                    .map(move |m| Message::Placeholder(index, m)),
                None => Task::none(),
            },
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let controls = row![
            text_input("Query (blank keeps each card's own)", &self.query)
                .on_input(Message::QueryChanged)
                .on_submit(Message::Apply)
                .width(Length::Fixed(280.0)),
            text_input("Width", &self.width)
                .on_input(Message::WidthChanged)
                .width(Length::Fixed(80.0)),
            text_input("Height", &self.height)
                .on_input(Message::HeightChanged)
                .width(Length::Fixed(80.0)),
            button("Apply").on_press(Message::Apply).padding(10),
        ]
        .spacing(10)
        .align_y(Alignment::Center);

        let cards = Row::with_children(self.placeholders.iter().enumerate().map(|(index, placeholder)| {
            placeholder
                .view()
                .map(move |m| Message::Placeholder(index, m))
        }))
        .spacing(20);

        let content = column![
            text("Placeholder Gallery").size(36),
            controls,
            cards,
            text(&self.status).size(16),
        ]
        .spacing(20)
        .padding(40)
        .align_x(Alignment::Center);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }
}

fn parse_dimension(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|value| *value > 0)
}

fn main() -> iced::Result {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(true).init();

    iced::application("Placeholder Gallery", Gallery::update, Gallery::view)
        .theme(Gallery::theme)
        .centered()
        .run_with(Gallery::new)
}

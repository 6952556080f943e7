use figure_canvas::FigureCanvas;
use generation::GenerationUpdate;
use iced::{
    widget::{
        button, canvas::Canvas, column, progress_bar, row, scrollable, text, text_input, Column,
        Container,
    },
    Alignment, Element, Length, Task, Theme,
};
use log::{info, warn};
use std::time::Duration;
use wsncore::telemetry::SessionMetrics;
use wsncore::{parse_sensor_count, GeneratorConfig, ProgressEvent, RenderedFigure, Scenario};

mod figure_canvas;
mod generation;

const DEFAULT_SENSOR_COUNT: &str = "20";
const RECORD_DELAY: Duration = Duration::from_micros(100);
const HISTORY_LIMIT: usize = 20;

const DESCRIPTION: &str = "This program simulates and visualizes a Wireless Sensor Network (WSN).\n\
Features:\n\
- Generate a network with a specified number of sensors.\n\
- Simulate cluster head selection and communication paths.\n\
- Estimate processing time for large networks.\n\
\n\
Use Cases:\n\
- Optimize sensor network design.\n\
- Analyze clustering and communication strategies.\n\
- Test real-world IoT and WSN configurations.";

fn main() -> iced::Result {
    env_logger::init();
    iced::application(Visualizer::boot, Visualizer::update, Visualizer::view)
        .title(application_title)
        .theme(application_theme)
        .run()
}

fn application_title(_: &Visualizer) -> String {
    "Wireless Sensor Network GUI".into()
}

fn application_theme(_: &Visualizer) -> Theme {
    Theme::Light
}

#[derive(Debug)]
struct Visualizer {
    sensor_input: String,
    generating: bool,
    progress: f32,
    progress_label: String,
    eta_label: String,
    status: String,
    figure: Option<RenderedFigure>,
    metrics: SessionMetrics,
    history: Vec<String>,
}

#[derive(Debug, Clone)]
enum Message {
    SensorCountChanged(String),
    UpdateVisualization,
    Generation(GenerationUpdate),
    EndSession,
}

impl Visualizer {
    fn boot() -> (Self, Task<Message>) {
        let mut state = Visualizer {
            sensor_input: DEFAULT_SENSOR_COUNT.into(),
            generating: false,
            progress: 0.0,
            progress_label: "Progress: 0%".into(),
            eta_label: "Estimated Finish Time: N/A".into(),
            status: "Ready".into(),
            figure: None,
            metrics: SessionMetrics::new(),
            history: Vec::new(),
        };
        let task = state.start_generation();
        (state, task)
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            Message::SensorCountChanged(value) => {
                state.sensor_input = value;
                Task::none()
            }
            Message::UpdateVisualization => state.start_generation(),
            Message::Generation(GenerationUpdate::Progress(event)) => {
                state.apply_progress(&event);
                Task::none()
            }
            Message::Generation(GenerationUpdate::Finished(Ok(scenario))) => {
                state.finish(scenario);
                Task::none()
            }
            Message::Generation(GenerationUpdate::Finished(Err(err))) => {
                warn!("generation failed: {err}");
                state.generating = false;
                state.progress_label = "Failed".into();
                state.eta_label = "Estimated Finish Time: N/A".into();
                state.status = format!("Generation error: {err}");
                state.push_history(format!("Generation failed: {err}"));
                Task::none()
            }
            Message::EndSession => {
                info!("session ended by user");
                iced::exit()
            }
        }
    }

    fn view(state: &Self) -> Element<'_, Message> {
        let idle = !state.generating;
        let metrics = state.metrics.snapshot();

        let history_list = if state.history.is_empty() {
            Column::new().push(text("No activity yet").size(12))
        } else {
            state
                .history
                .iter()
                .rev()
                .fold(Column::new().spacing(4), |col, entry| {
                    col.push(text(entry.clone()).size(12))
                })
        };

        let control_column = column![
            text(DESCRIPTION).size(13),
            text("Number of Sensors:").size(16),
            text_input("Number of sensors", &state.sensor_input)
                .on_input(Message::SensorCountChanged)
                .on_submit(Message::UpdateVisualization)
                .padding(6),
            button("Update Visualization")
                .style(button::primary)
                .on_press_maybe(idle.then_some(Message::UpdateVisualization))
                .padding(10),
            button("End Session")
                .style(button::danger)
                .on_press_maybe(idle.then_some(Message::EndSession))
                .padding(10),
            progress_bar(0.0..=100.0, state.progress),
            text(&state.progress_label).size(14),
            text(&state.eta_label).size(14),
            text(&state.status).size(12),
            text(format!(
                "Session: {} networks / {} sensors / {} rejected",
                metrics.networks, metrics.sensors, metrics.rejected
            ))
            .size(12),
            text("Activity log").size(16),
            Container::new(scrollable(history_list).height(Length::Fixed(140.0))).padding(6),
        ]
        .spacing(10)
        .padding(16)
        .width(Length::Fixed(280.0));

        let figure_view: Element<'_, Message> = match &state.figure {
            Some(figure) => Canvas::new(FigureCanvas::new(figure))
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => Container::new(text("No network generated yet").size(16))
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into(),
        };

        let layout = row![control_column, figure_view]
            .spacing(20)
            .align_y(Alignment::Start)
            .padding(20);

        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Validates the input and launches a generation; invalid input leaves the
    /// current figure untouched.
    fn start_generation(&mut self) -> Task<Message> {
        if self.generating {
            return Task::none();
        }

        let count = match parse_sensor_count(&self.sensor_input) {
            Ok(count) => count,
            Err(err) => {
                warn!("rejected sensor count {:?}: {err}", self.sensor_input);
                self.metrics.record_rejected();
                self.status = format!("Cannot generate: {err}");
                self.push_history(format!("Rejected input {:?}", self.sensor_input));
                return Task::none();
            }
        };

        info!("generating network with {count} sensors");
        self.generating = true;
        self.progress = 0.0;
        self.progress_label = "Progress: 0%".into();
        self.eta_label = "Estimated Finish Time: Calculating...".into();
        self.status = format!("Generating {count} sensors...");

        let config = GeneratorConfig {
            seed: None,
            record_delay: RECORD_DELAY,
        };
        Task::run(generation::run(count, config), Message::Generation)
    }

    fn apply_progress(&mut self, event: &ProgressEvent) {
        let (minutes, seconds) = event.remaining_clock();
        self.progress = event.percent();
        self.progress_label = format!("Progress: {}/{} sensors", event.completed, event.total);
        self.eta_label = format!("Estimated Finish Time: {minutes} min {seconds} sec");
    }

    fn finish(&mut self, scenario: Scenario) {
        self.metrics.record_network(scenario.sensor_count());
        self.push_history(format!(
            "Network: {} sensors / {} cluster heads",
            scenario.sensor_count(),
            scenario.distinct_head_count()
        ));
        self.figure = Some(scenario.figure);
        self.generating = false;
        self.progress = 100.0;
        self.progress_label = "Done!".into();
        self.eta_label = "Job Completed!".into();
        self.status = "Visualization updated".into();
    }

    fn push_history(&mut self, entry: String) {
        self.history.push(entry);
        if self.history.len() > HISTORY_LIMIT {
            self.history.remove(0);
        }
    }
}

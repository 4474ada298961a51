use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::Style,
    Frame, Terminal,
};
use tokio::sync::mpsc;

use crate::anim::{RevealHandle, RevealTimer, ScrambleAnimator, ScrambleFrame};
use crate::config::Config;
use crate::data::{
    filter_projects, project_by_id, Project, ProjectFilter, BOOT_MESSAGES, CHANNELS,
};
use crate::syslog::{ChannelLogSink, LogEntry, LogSink, SystemLog};
use crate::ui::action::{key_hints, Action, KeyContext};
use crate::ui::components::{
    render_key_hints, theme, ArchiveView, BootScreen, ContactView, HomeView, NavBar,
    NotFoundView, ProjectDetail, SystemLogView, ABOUT_OFFSET,
};
use crate::ui::contact::{ContactForm, FormError, FormField};
use crate::ui::events::{AppEvent, Focus, Screen};
use crate::ui::route::Route;
use crate::util::{file_name_from_url, open_url};

/// Delay between frames (~60 fps)
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Nav bar entries, in display order
const NAV_ITEMS: [(&str, Route); 4] = [
    ("Home", Route::Home),
    ("Projects", Route::Projects),
    ("About", Route::About),
    ("Contact", Route::Contact),
];

/// Hands a URL to something that can open it
pub type Opener = fn(&str) -> io::Result<()>;

/// Startup choices that come from the command line
#[derive(Debug, Clone, Default)]
pub struct AppOptions {
    /// Where to land once the boot sequence is done
    pub route: Route,
}

/// Main application state
pub struct App {
    /// Application configuration
    config: Config,
    /// Whether the app should quit
    should_quit: bool,
    screen: Screen,
    route: Route,
    /// Route to show when boot completes
    landing: Route,
    /// Route shown before the current one, for "go back"
    previous: Option<Route>,
    /// Path of the last "User navigated to" entry
    logged_path: Option<String>,
    focus: Focus,
    /// Nav label under the mouse pointer
    mouse_hover: Option<usize>,
    /// Running boot reveal, while on the boot screen
    boot: Option<RevealHandle>,
    nav: Vec<ScrambleAnimator>,
    log: SystemLog,
    sink: ChannelLogSink,
    log_rx: mpsc::UnboundedReceiver<LogEntry>,
    /// Event channel sender
    event_tx: mpsc::UnboundedSender<AppEvent>,
    /// Event channel receiver
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    filter: ProjectFilter,
    selected: usize,
    /// Vertical scroll for the home and detail pages
    scroll: u16,
    contact: ContactForm,
    opener: Opener,
    /// Frame counter for blink and glitch effects
    tick: u64,
    /// Size of the last drawn frame, for mouse hit-testing
    last_area: Rect,
}

impl App {
    /// Build the app and, if enabled, start the boot sequence.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(config: Config, options: AppOptions) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (sink, log_rx) = ChannelLogSink::channel();

        let nav = NAV_ITEMS
            .iter()
            .map(|(label, _)| ScrambleAnimator::new(*label).with_interval(config.scramble_interval))
            .collect();

        let mut app = Self {
            log: SystemLog::new(config.log_capacity),
            config,
            should_quit: false,
            screen: Screen::Main,
            route: Route::Home,
            landing: options.route,
            previous: None,
            logged_path: None,
            focus: Focus::Page,
            mouse_hover: None,
            boot: None,
            nav,
            sink,
            log_rx,
            event_tx,
            event_rx,
            filter: ProjectFilter::All,
            selected: 0,
            scroll: 0,
            contact: ContactForm::new(),
            opener: open_url,
            tick: 0,
            last_area: Rect::default(),
        };

        if app.config.boot.enabled {
            app.start_boot();
        } else {
            app.land();
        }
        app
    }

    /// Replace the URL opener (the default launches the desktop handler)
    pub fn with_opener(mut self, opener: Opener) -> Self {
        self.opener = opener;
        self
    }

    fn start_boot(&mut self) {
        let boot = &self.config.boot;
        let tx = self.event_tx.clone();
        let handle = RevealTimer::new(boot.interval)
            .with_grace(boot.settle, boot.tear)
            .spawn(BOOT_MESSAGES.iter().copied(), move || {
                if tx.send(AppEvent::BootComplete).is_err() {
                    tracing::debug!("Boot finished after the app closed");
                }
            });
        tracing::debug!(lines = BOOT_MESSAGES.len(), "Boot sequence started");
        self.boot = Some(handle);
        self.screen = Screen::Boot;
    }

    fn finish_boot(&mut self) {
        if let Some(handle) = self.boot.take() {
            handle.cancel();
        }
        if self.screen == Screen::Boot {
            self.screen = Screen::Main;
            self.land();
        }
    }

    /// Show the first page; there is nothing to go back to yet
    fn land(&mut self) {
        self.navigate(self.landing.clone());
        self.previous = None;
    }

    /// Run the application main loop
    pub async fn run(mut self) -> anyhow::Result<()> {
        let mut guard = crate::ui::TerminalGuard::enter()?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        let result = self.event_loop(&mut terminal).await;

        let cleanup = guard.cleanup();
        terminal.show_cursor()?;
        result.and(cleanup)
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            self.drain_log();
            terminal.draw(|f| self.draw(f))?;

            tokio::select! {
                // Terminal input events + frame tick
                _ = tokio::time::sleep(FRAME_INTERVAL) => {
                    while event::poll(Duration::ZERO)? {
                        let input = event::read()?;
                        self.handle_app_event(AppEvent::Input(input));
                    }
                    self.tick = self.tick.wrapping_add(1);
                }

                // App events from channel
                Some(event) = self.event_rx.recv() => {
                    self.handle_app_event(event);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Wait for the next app event and apply it. Returns `false` if the
    /// channel is closed.
    pub async fn process_next_event(&mut self) -> bool {
        match self.event_rx.recv().await {
            Some(event) => {
                self.handle_app_event(event);
                true
            }
            None => false,
        }
    }

    pub fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(Event::Key(key)) => self.handle_key(key),
            AppEvent::Input(Event::Mouse(mouse)) => self.handle_mouse(mouse),
            AppEvent::Input(_) => {}
            AppEvent::BootComplete => {
                tracing::debug!("Boot sequence complete");
                self.finish_boot();
            }
            AppEvent::TransmissionComplete => {
                self.contact.finish_submit();
                self.sink.emit("Message sent:", Some("SUCCESS"));
            }
            AppEvent::Quit => self.should_quit = true,
        }
    }

    /// Move pending log entries into the log panel
    pub fn drain_log(&mut self) {
        while let Ok(entry) = self.log_rx.try_recv() {
            self.log.push(entry);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Any key skips the boot sequence
        if self.screen == Screen::Boot {
            tracing::debug!("Boot sequence skipped");
            self.finish_boot();
            return;
        }

        if let Some(action) = Action::from_key(self.key_context(), key) {
            self.apply(action);
        }
    }

    fn key_context(&self) -> KeyContext {
        if let Focus::Nav(_) = self.focus {
            return KeyContext::Nav;
        }
        match self.route {
            Route::Home | Route::About => KeyContext::Home,
            Route::Projects => KeyContext::Archive,
            Route::ProjectDetail(_) => KeyContext::Detail,
            Route::Contact => match self.contact.focus() {
                Some(FormField::Message) => KeyContext::ContactField { multiline: true },
                Some(FormField::Name | FormField::Email) => {
                    KeyContext::ContactField { multiline: false }
                }
                Some(FormField::Submit) | None => KeyContext::ContactButton,
            },
            Route::NotFound(_) => KeyContext::NotFound,
        }
    }

    fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleLog => self.log.toggle_expanded(),
            Action::NavigateTo(index) => self.navigate_nav(index),

            Action::FocusNext | Action::FocusPrev => self.move_focus(action == Action::FocusNext),
            Action::Activate => {
                if let Focus::Nav(index) = self.focus {
                    self.navigate_nav(index);
                }
            }
            Action::Unfocus => {
                self.focus = match (self.focus, &self.route) {
                    (Focus::Page, Route::Contact) => Focus::Nav(3),
                    _ => Focus::Page,
                };
                if let Focus::Nav(index) = self.focus {
                    self.hover_nav(index);
                }
            }

            Action::SelectNext => self.select(self.selected.saturating_add(1)),
            Action::SelectPrev => self.select(self.selected.saturating_sub(1)),
            Action::OpenSelected => self.open_selected(),
            Action::NextFilter => self.set_filter(self.filter.next()),
            Action::PrevFilter => self.set_filter(self.filter.prev()),

            Action::ScrollUp(n) => self.scroll = self.scroll.saturating_sub(n),
            Action::ScrollDown(n) => {
                self.scroll = self.scroll.saturating_add(n).min(self.max_scroll());
            }
            Action::ScrollToTop => self.scroll = 0,

            Action::Back => self.navigate(Route::Projects),
            Action::GoHome => self.navigate(Route::Home),
            Action::GoBack => {
                let target = self.previous.clone().unwrap_or(Route::Home);
                self.navigate(target);
            }
            Action::OpenGithub => {
                if let Some(project) = self.current_project() {
                    self.sink.emit("External link:", Some("GitHub"));
                    self.open(project.github_link);
                }
            }
            Action::OpenChannel(index) => self.open_channel(index),
            Action::DownloadCv => {
                let url = self.config.cv_url.clone();
                self.sink.emit("Downloading:", Some(file_name_from_url(&url)));
                self.open(&url);
            }

            Action::Submit => self.submit_contact(),
            Action::Insert(c) => self.edit(|input| input.insert_char(c)),
            Action::InsertNewline => self.edit(|input| input.insert_char('\n')),
            Action::Backspace => self.edit(|input| input.delete_char()),
            Action::Delete => self.edit(|input| input.delete_forward()),
            Action::DeleteWordBack => self.edit(|input| input.delete_word()),
            Action::MoveCursorLeft => self.edit(|input| input.move_left()),
            Action::MoveCursorRight => self.edit(|input| input.move_right()),
            Action::MoveCursorStart => self.edit(|input| input.move_start()),
            Action::MoveCursorEnd => self.edit(|input| input.move_end()),
        }
    }

    fn edit(&mut self, f: impl FnOnce(&mut crate::ui::components::TextInputState)) {
        if let Some(input) = self.contact.focused_input_mut() {
            f(input);
        }
        self.contact.clear_error();
    }

    fn move_focus(&mut self, forward: bool) {
        let on_form = self.route == Route::Contact && self.focus == Focus::Page;
        if on_form {
            if forward {
                self.contact.focus_next();
            } else {
                self.contact.focus_prev();
            }
            return;
        }

        let len = NAV_ITEMS.len();
        let next = match self.focus {
            Focus::Nav(i) if forward => (i + 1) % len,
            Focus::Nav(i) => (i + len - 1) % len,
            Focus::Page => self.route.nav_index().unwrap_or(0),
        };
        self.focus = Focus::Nav(next);
        self.hover_nav(next);
    }

    /// A nav label gained hover or keyboard focus
    fn hover_nav(&mut self, index: usize) {
        if let Some(animator) = self.nav.get(index) {
            animator.trigger();
        }
    }

    fn navigate_nav(&mut self, index: usize) {
        if let Some((_, route)) = NAV_ITEMS.get(index) {
            self.navigate(route.clone());
        }
    }

    /// Switch screens and record the visit in the system log
    pub fn navigate(&mut self, route: Route) {
        let route = match route {
            Route::ProjectDetail(id) if project_by_id(&id).is_none() => {
                tracing::debug!(id = %id, "Unknown project, redirecting to archive");
                Route::Projects
            }
            other => other,
        };

        if let Route::NotFound(path) = &route {
            tracing::error!(path = %path, "User attempted to access non-existent route");
        }

        self.scroll = if route == Route::About { ABOUT_OFFSET } else { 0 };
        self.focus = Focus::Page;
        if route == Route::Projects && self.route != Route::Projects {
            self.selected = self.selected.min(self.visible_projects().len().saturating_sub(1));
        }
        let old = std::mem::replace(&mut self.route, route);
        if old != self.route {
            self.previous = Some(old);
        }

        // Only a change of pathname counts; "/" and "/#about" are the same page
        let path = self.route.pathname();
        if self.logged_path.as_deref() != Some(path.as_str()) {
            self.sink.emit("User navigated to", Some(&path));
            self.logged_path = Some(path);
        }

        if let Some(project) = self.current_project() {
            self.sink.emit("Loaded file:", Some(project.title));
        }
    }

    fn current_project(&self) -> Option<&'static Project> {
        match &self.route {
            Route::ProjectDetail(id) => project_by_id(id),
            _ => None,
        }
    }

    pub fn visible_projects(&self) -> Vec<&'static Project> {
        filter_projects(self.filter)
    }

    fn select(&mut self, index: usize) {
        let projects = self.visible_projects();
        let Some(last) = projects.len().checked_sub(1) else {
            return;
        };
        let index = index.min(last);
        if index != self.selected {
            self.selected = index;
            self.sink.emit("Hovering project:", Some(projects[index].title));
        }
    }

    fn open_selected(&mut self) {
        let projects = self.visible_projects();
        if let Some(project) = projects.get(self.selected) {
            self.sink.emit("Accessed project:", Some(project.title));
            self.navigate(Route::ProjectDetail(project.id.to_string()));
        }
    }

    fn set_filter(&mut self, filter: ProjectFilter) {
        self.filter = filter;
        self.selected = 0;
        self.sink.emit("Filter applied:", Some(filter.label()));
    }

    fn max_scroll(&self) -> u16 {
        match self.current_project() {
            Some(project) => ProjectDetail::lines(project).len().saturating_sub(1) as u16,
            None => HomeView::max_scroll(),
        }
    }

    fn open_channel(&mut self, index: usize) {
        if let Some(channel) = CHANNELS.get(index) {
            self.sink.emit("External link:", Some(channel.name));
            self.open(channel.url);
        }
    }

    fn open(&self, url: &str) {
        match (self.opener)(url) {
            Ok(()) => tracing::info!(url, "Opened link"),
            Err(e) => tracing::warn!(url, error = %e, "Failed to open link"),
        }
    }

    fn submit_contact(&mut self) {
        match self.contact.begin_submit() {
            Ok(message) => {
                self.sink.emit("Form submitted:", Some(&message.email));
                let tx = self.event_tx.clone();
                let delay = self.config.transmit_delay;
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    if tx.send(AppEvent::TransmissionComplete).is_err() {
                        tracing::debug!("Transmission finished after the app closed");
                    }
                });
            }
            Err(FormError::Busy) => tracing::debug!("Submit ignored while transmitting"),
            Err(e) => {
                let reason = e.to_string();
                self.sink.emit("Transmission rejected:", Some(&reason));
            }
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.screen == Screen::Boot {
            if let MouseEventKind::Down(_) = mouse.kind {
                self.finish_boot();
            }
            return;
        }

        let [nav_area, page_area, log_area, _] = self.main_layout(self.last_area);
        let pos = Position::new(mouse.column, mouse.row);
        let labels = self.nav_frames();
        let label_at = NavBar::label_areas(nav_area, &labels)
            .iter()
            .position(|rect| rect.contains(pos));

        match mouse.kind {
            MouseEventKind::Moved => {
                if label_at.is_some() && label_at != self.mouse_hover {
                    if let Some(index) = label_at {
                        self.hover_nav(index);
                    }
                }
                self.mouse_hover = label_at;

                if self.route == Route::Projects {
                    let projects = self.visible_projects();
                    let view = ArchiveView::new(&projects, self.filter, self.selected);
                    if let Some(index) = view.card_at(Self::page_inner(page_area), mouse.row) {
                        self.select(index);
                    }
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = label_at {
                    self.navigate_nav(index);
                } else if log_area.contains(pos) {
                    self.log.toggle_expanded();
                } else if page_area.contains(pos) {
                    self.click_page(Self::page_inner(page_area), mouse.column, mouse.row);
                }
            }
            MouseEventKind::ScrollDown => match self.route {
                Route::Projects => self.apply(Action::SelectNext),
                _ => self.apply(Action::ScrollDown(3)),
            },
            MouseEventKind::ScrollUp => match self.route {
                Route::Projects => self.apply(Action::SelectPrev),
                _ => self.apply(Action::ScrollUp(3)),
            },
            _ => {}
        }
    }

    fn click_page(&mut self, area: Rect, x: u16, y: u16) {
        match self.route {
            Route::Projects => {
                let pos = Position::new(x, y);
                if let Some((filter, _)) = ArchiveView::filter_areas(area)
                    .into_iter()
                    .find(|(_, rect)| rect.contains(pos))
                {
                    self.set_filter(filter);
                    return;
                }
                let projects = self.visible_projects();
                let view = ArchiveView::new(&projects, self.filter, self.selected);
                if let Some(index) = view.card_at(area, y) {
                    self.select(index);
                    self.open_selected();
                }
            }
            Route::Contact => {
                self.focus = Focus::Page;
                if let Some(index) = ContactView::channel_at(area, x, y) {
                    self.open_channel(index);
                    return;
                }
                match ContactView::field_at(area, x, y) {
                    Some(FormField::Submit) => {
                        self.contact.set_focus(FormField::Submit);
                        self.submit_contact();
                    }
                    Some(field) => self.contact.set_focus(field),
                    None => {}
                }
            }
            _ => {}
        }
    }

    fn nav_frames(&self) -> Vec<ScrambleFrame> {
        self.nav.iter().map(ScrambleAnimator::frame).collect()
    }

    /// Nav bar, page, log panel and footer
    fn main_layout(&self, area: Rect) -> [Rect; 4] {
        Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(SystemLogView::desired_height(&self.log)),
            Constraint::Length(1),
        ])
        .areas(area)
    }

    fn page_inner(page_area: Rect) -> Rect {
        page_area.inner(ratatui::layout::Margin::new(2, 1))
    }

    pub fn draw(&mut self, f: &mut Frame) {
        let area = f.area();
        self.last_area = area;
        self.render(area, f.buffer_mut());
    }

    fn render(&self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(theme::BACKGROUND));

        if self.screen == Screen::Boot {
            if let Some(handle) = &self.boot {
                BootScreen::new(&handle.frame(), self.tick).render(area, buf);
            }
            return;
        }

        let [nav_area, page_area, log_area, footer_area] = self.main_layout(area);

        let labels = self.nav_frames();
        let hovered = match self.focus {
            Focus::Nav(index) => Some(index),
            Focus::Page => self.mouse_hover,
        };
        NavBar::new(&labels)
            .active(self.route.nav_index())
            .hovered(hovered)
            .render(nav_area, buf);

        let page = Self::page_inner(page_area);
        let page_focused = self.focus == Focus::Page;
        match &self.route {
            Route::Home | Route::About => HomeView::new(self.scroll).render(page, buf),
            Route::Projects => {
                let projects = self.visible_projects();
                ArchiveView::new(&projects, self.filter, self.selected).render(page, buf);
            }
            Route::ProjectDetail(_) => {
                if let Some(project) = self.current_project() {
                    ProjectDetail::new(project, self.scroll).render(page, buf);
                }
            }
            Route::Contact => ContactView::new(&self.contact, page_focused).render(page, buf),
            Route::NotFound(path) => NotFoundView::new(path).render(page, buf),
        }

        SystemLogView::new(&self.log).render(log_area, buf);
        render_key_hints(footer_area, buf, &key_hints(self.key_context()));
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn log(&self) -> &SystemLog {
        &self.log
    }

    pub fn contact(&self) -> &ContactForm {
        &self.contact
    }

    pub fn filter(&self) -> ProjectFilter {
        self.filter
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn nav_label(&self, index: usize) -> Option<ScrambleFrame> {
        self.nav.get(index).map(ScrambleAnimator::frame)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

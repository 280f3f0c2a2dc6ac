//! Application state and event handling

use crate::config::SiteConfig;
use crate::content::SiteContent;
use crate::platform::COPY_MODIFIER;
use crate::relay::{deliver, EmailJsRelay, MailRelay, MailRequest, RelayError, RelayReceipt};
use crate::state::{
    AppState, ApplicationModal, CarouselController, ContactForm, Form, GalleryState, MailTarget,
    ScrollLock, SplashState, SubmissionController, SubmissionStatus, Swipe, SwipeTracker,
    ValidationRules, View, SUBMIT_BUTTON,
};
use crate::ui;
use anyhow::Result;
use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use uuid::Uuid;

/// Window in which a second Ctrl+C quits
const DOUBLE_TAP_WINDOW: Duration = Duration::from_millis(1000);

/// Terminal size assumed before the first draw (height, width)
const DEFAULT_TERMINAL_SIZE: (u16, u16) = (24, 80);

/// Which form a relay outcome belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    Application,
}

/// Result of one spawned relay call
#[derive(Debug)]
pub struct SubmissionOutcome {
    pub form: FormKind,
    pub attempt: Uuid,
    pub result: Result<RelayReceipt, RelayError>,
}

/// Main application
pub struct App {
    /// Current application state
    pub state: AppState,
    pub config: SiteConfig,
    pub content: SiteContent,
    /// Mail relay shared with in-flight submissions
    relay: Arc<dyn MailRelay>,
    /// Hero slides on the home view
    pub hero: CarouselController,
    /// Testimonials on the clients view
    pub clients: CarouselController,
    pub contact: SubmissionController<ContactForm>,
    /// Open job application, holding the scroll lock
    pub application: Option<ApplicationModal>,
    pub scroll_lock: ScrollLock,
    outcomes_tx: mpsc::UnboundedSender<SubmissionOutcome>,
    outcomes_rx: mpsc::UnboundedReceiver<SubmissionOutcome>,
    /// Whether the app should quit
    quit: bool,
    /// Feedback shown in the status bar
    pub copy_message: Option<String>,
    /// Splash screen animation state
    pub splash_state: Option<SplashState>,
    /// Terminal size for hit testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
    swipe: SwipeTracker,
}

impl App {
    /// Create the app with content and relay resolved from the configuration
    pub fn new(config: SiteConfig) -> Self {
        let content = SiteContent::load(config.content_path.as_deref());
        for section in content.missing_sections() {
            tracing::warn!(section, "section will render as a placeholder");
        }
        let relay = EmailJsRelay::from_config(&config);
        tracing::debug!(endpoint = relay.endpoint(), "mail relay configured");
        let relay: Arc<dyn MailRelay> = Arc::new(relay);
        Self::with_parts(config, content, relay, Instant::now())
    }

    pub fn with_parts(
        config: SiteConfig,
        content: SiteContent,
        relay: Arc<dyn MailRelay>,
        now: Instant,
    ) -> Self {
        let gallery = GalleryState::new(content.gallery.as_deref().unwrap_or(&[]));
        let hero = CarouselController::new("hero", content.slides().len(), config.hero_interval());
        let clients = CarouselController::new(
            "clients",
            content.testimonials().len(),
            config.testimonial_interval(),
        );
        let contact = SubmissionController::new(
            ContactForm::new(),
            ValidationRules::contact(config.contact_message_min_len()),
            MailTarget {
                service_id: config.relay_service_id(),
                template_id: config.contact_template_id(),
            },
            config.auto_close_delay(),
        );
        let (outcomes_tx, outcomes_rx) = mpsc::unbounded_channel();

        Self {
            state: AppState::new(gallery),
            config,
            content,
            relay,
            hero,
            clients,
            contact,
            application: None,
            scroll_lock: ScrollLock::new(),
            outcomes_tx,
            outcomes_rx,
            quit: false,
            copy_message: None,
            splash_state: Some(SplashState::new(now)),
            terminal_size: None,
            last_ctrl_c: None,
            swipe: SwipeTracker::default(),
        }
    }

    /// Update splash animation state
    /// Returns true if animation is complete and we should transition
    pub fn update_splash(&mut self, now: Instant, terminal_height: u16) -> bool {
        if let Some(ref mut splash) = self.splash_state {
            splash.update(now, terminal_height);
            if splash.is_complete() {
                self.finish_splash(now);
                return true;
            }
        }
        false
    }

    fn finish_splash(&mut self, now: Instant) {
        self.splash_state = None;
        self.switch_view(View::Home, now);
    }

    /// Check if in splash screen
    pub fn in_splash(&self) -> bool {
        matches!(self.state.current_view, View::Splash)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Whether the event loop should redraw at animation speed
    pub fn is_animating(&self, now: Instant) -> bool {
        self.in_splash()
            || self.hero.is_animating(now)
            || self.clients.is_animating(now)
            || self.contact.status() == SubmissionStatus::Submitting
            || self
                .application
                .as_ref()
                .is_some_and(|m| m.controller.status() == SubmissionStatus::Submitting)
    }

    /// Whole-terminal rectangle used for hit testing
    pub fn screen(&self) -> Rect {
        let (height, width) = self.terminal_size.unwrap_or(DEFAULT_TERMINAL_SIZE);
        Rect::new(0, 0, width, height)
    }

    /// Navigate to a new view; refused while the scroll lock is held
    pub fn navigate(&mut self, view: View) -> bool {
        if self.scroll_lock.is_locked() {
            tracing::debug!(?view, "navigation blocked by scroll lock");
            return false;
        }
        self.switch_view(view, Instant::now());
        true
    }

    fn switch_view(&mut self, view: View, now: Instant) {
        if view == self.state.current_view {
            return;
        }
        match self.state.current_view {
            View::Home => {
                self.hero.unmount();
                self.state.hero_hovered = false;
                self.state.hero_focused = false;
            }
            View::Clients => {
                self.clients.unmount();
                self.state.clients_hovered = false;
            }
            _ => {}
        }

        tracing::debug!(from = ?self.state.current_view, to = ?view, "switching view");
        self.state.current_view = view;
        self.state.scroll_offset = 0;
        self.swipe.cancel();

        match view {
            View::Home => self.hero.mount(now),
            View::Clients => self.clients.mount(now),
            _ => {}
        }
    }

    /// Advance timers and apply finished submissions
    pub fn on_tick(&mut self, now: Instant) {
        while let Ok(outcome) = self.outcomes_rx.try_recv() {
            self.apply_outcome(outcome, now);
        }

        self.contact.poll_auto_close(now);
        let application_closed = self
            .application
            .as_mut()
            .is_some_and(|modal| modal.controller.poll_auto_close(now));
        if application_closed {
            self.close_application();
        }

        self.hero.set_paused(self.state.hero_paused());
        if self.hero.tick(now) {
            tracing::trace!(slide = self.hero.current(), "hero advanced");
        }
        self.clients.set_paused(self.state.clients_hovered);
        self.clients.tick(now);
    }

    fn apply_outcome(&mut self, outcome: SubmissionOutcome, now: Instant) {
        match outcome.form {
            FormKind::Contact => {
                self.contact.finish(outcome.attempt, outcome.result, now);
            }
            FormKind::Application => match self.application.as_mut() {
                Some(modal) => {
                    modal.controller.finish(outcome.attempt, outcome.result, now);
                }
                None => {
                    tracing::debug!(attempt = %outcome.attempt, "application closed before relay answered");
                }
            },
        }
    }

    /// Send a validated request on the runtime and report back over the channel
    fn dispatch(&self, form: FormKind, request: MailRequest) {
        let relay = Arc::clone(&self.relay);
        let tx = self.outcomes_tx.clone();
        let timeout = self.config.submit_timeout();
        tokio::spawn(async move {
            let result = deliver(relay.as_ref(), &request, timeout).await;
            let outcome = SubmissionOutcome {
                form,
                attempt: request.attempt,
                result,
            };
            if tx.send(outcome).is_err() {
                tracing::debug!("app gone before submission finished");
            }
        });
    }

    pub fn submit_contact(&mut self) {
        if let Ok(request) = self.contact.begin_submit(Local::now().naive_local()) {
            self.dispatch(FormKind::Contact, request);
        }
    }

    pub fn submit_application(&mut self) {
        let Some(modal) = self.application.as_mut() else {
            return;
        };
        if let Ok(request) = modal.controller.begin_submit(Local::now().naive_local()) {
            self.dispatch(FormKind::Application, request);
        }
    }

    /// Open the application form for the selected position
    pub fn open_application(&mut self) {
        if self.application.is_some() {
            return;
        }
        let positions = self.content.open_positions();
        let Some(position) = positions.get(self.state.selected_position).cloned() else {
            tracing::debug!("no open position selected");
            return;
        };
        self.application = Some(ApplicationModal::open(
            &position,
            positions,
            self.config.motivation_min_len(),
            MailTarget {
                service_id: self.config.relay_service_id(),
                template_id: self.config.application_template_id(),
            },
            self.config.auto_close_delay(),
            &self.scroll_lock,
        ));
    }

    /// Close the application form, releasing the scroll lock
    pub fn close_application(&mut self) {
        if let Some(modal) = self.application.take() {
            tracing::info!(position = modal.position(), "application form closed");
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let now = Instant::now();

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.handle_ctrl_c(now);
            return Ok(());
        }

        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Any key skips the splash screen
        if self.in_splash() {
            self.finish_splash(now);
            return Ok(());
        }

        // Clear any status messages on key press
        self.copy_message = None;

        if self.application.is_some() {
            self.handle_application_key(key);
            return Ok(());
        }

        // View switching shared by every page
        match key.code {
            KeyCode::PageDown => {
                self.navigate(self.state.current_view.next());
                return Ok(());
            }
            KeyCode::PageUp => {
                self.navigate(self.state.current_view.prev());
                return Ok(());
            }
            KeyCode::Char(']') if !self.state.current_view.is_form_view() => {
                self.navigate(self.state.current_view.next());
                return Ok(());
            }
            KeyCode::Char('[') if !self.state.current_view.is_form_view() => {
                self.navigate(self.state.current_view.prev());
                return Ok(());
            }
            _ => {}
        }

        match self.state.current_view {
            View::Splash => {}
            View::Home => self.handle_home_key(key, now),
            View::About => self.handle_scroll_key(key),
            View::Projects => self.handle_projects_key(key),
            View::Services => self.handle_services_key(key),
            View::Clients => self.handle_clients_key(key, now),
            View::Careers => self.handle_careers_key(key),
            View::Contact => self.handle_contact_key(key)?,
        }

        Ok(())
    }

    fn handle_ctrl_c(&mut self, now: Instant) {
        if self.in_splash() {
            self.finish_splash(now);
            return;
        }
        match self.last_ctrl_c {
            Some(last) if now.duration_since(last) <= DOUBLE_TAP_WINDOW => {
                tracing::info!("quit requested");
                self.quit = true;
            }
            _ => {
                self.last_ctrl_c = Some(now);
                self.copy_message = Some("Press Ctrl+C again to quit".to_string());
            }
        }
    }

    /// Line scrolling shared by the reading views
    fn handle_scroll_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.state.scroll_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.scroll_up(),
            KeyCode::Char('d') => self.state.scroll_down_page(),
            KeyCode::Char('u') => self.state.scroll_up_page(),
            _ => {}
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.hero.prev(now),
            KeyCode::Right | KeyCode::Char('l') => self.hero.next(now),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(digit) = c.to_digit(10) {
                    self.hero.go_to(digit as usize - 1, now);
                }
            }
            KeyCode::Tab => {
                self.state.hero_focused = !self.state.hero_focused;
                self.hero.set_paused(self.state.hero_paused());
            }
            KeyCode::Enter => {
                self.navigate(View::Contact);
            }
            _ => self.handle_scroll_key(key),
        }
    }

    fn handle_projects_key(&mut self, key: KeyEvent) {
        let items = self.content.gallery.as_deref().unwrap_or(&[]);
        let visible = self.state.gallery.visible(items).len();
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.state.gallery.prev_category(),
            KeyCode::Right | KeyCode::Char('l') => self.state.gallery.next_category(),
            KeyCode::Down | KeyCode::Char('j') => self.state.gallery.hover_next(visible),
            KeyCode::Up | KeyCode::Char('k') => self.state.gallery.hover_prev(visible),
            KeyCode::Esc => self.state.gallery.hovered = None,
            _ => {}
        }
    }

    fn handle_services_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.state.service_tab = self.state.service_tab.prev();
                self.state.scroll_offset = 0;
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => {
                self.state.service_tab = self.state.service_tab.next();
                self.state.scroll_offset = 0;
            }
            _ => self.handle_scroll_key(key),
        }
    }

    fn handle_clients_key(&mut self, key: KeyEvent, now: Instant) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.clients.prev(now),
            KeyCode::Right | KeyCode::Char('l') => self.clients.next(now),
            _ => self.handle_scroll_key(key),
        }
    }

    fn handle_careers_key(&mut self, key: KeyEvent) {
        let count = self.content.positions().len();
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.state.select_next_position(count),
            KeyCode::Up | KeyCode::Char('k') => self.state.select_prev_position(),
            KeyCode::Enter | KeyCode::Char('a') => self.open_application(),
            KeyCode::Char('d') => self.state.scroll_down_page(),
            KeyCode::Char('u') => self.state.scroll_up_page(),
            _ => {}
        }
    }

    fn handle_contact_key(&mut self, key: KeyEvent) -> Result<()> {
        let form = self.contact.form_mut();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if key.modifiers.contains(COPY_MODIFIER) && key.code == KeyCode::Char('y') {
            self.copy_contact_email();
            return Ok(());
        }

        match key.code {
            KeyCode::Char('s') if ctrl => self.submit_contact(),
            KeyCode::Esc => {
                self.navigate(View::Home);
            }
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Left if form.is_buttons_row_active() => form.prev_button(),
            KeyCode::Right if form.is_buttons_row_active() => form.next_button(),
            KeyCode::Enter if form.is_buttons_row_active() => {
                if form.selected_button == SUBMIT_BUTTON {
                    self.submit_contact();
                } else if !self.contact.reset() {
                    tracing::debug!("clear ignored while the enquiry is sending");
                }
            }
            KeyCode::Enter => {
                let multiline = form
                    .get_field(form.active_field())
                    .is_some_and(|f| f.is_multiline());
                if multiline {
                    self.contact.input_char('\n');
                } else {
                    form.next_field();
                }
            }
            KeyCode::Backspace => self.contact.backspace(),
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                self.contact.input_char(c);
            }
            _ => {}
        }
        Ok(())
    }

    fn handle_application_key(&mut self, key: KeyEvent) {
        let Some(modal) = self.application.as_mut() else {
            return;
        };
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let controller = &mut modal.controller;
        let form = controller.form_mut();

        match key.code {
            KeyCode::Esc => self.close_application(),
            KeyCode::Char('s') if ctrl => self.submit_application(),
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Left if form.is_buttons_row_active() => form.prev_button(),
            KeyCode::Right if form.is_buttons_row_active() => form.next_button(),
            KeyCode::Enter if form.is_buttons_row_active() => {
                if form.selected_button == SUBMIT_BUTTON {
                    self.submit_application();
                } else {
                    self.close_application();
                }
            }
            KeyCode::Enter => {
                let multiline = form
                    .get_field(form.active_field())
                    .is_some_and(|f| f.is_multiline());
                if multiline {
                    controller.input_char('\n');
                } else {
                    form.next_field();
                }
            }
            KeyCode::Backspace => controller.backspace(),
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                controller.input_char(c);
            }
            _ => {}
        }
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        let now = Instant::now();
        let position = Position::new(mouse.column, mouse.row);

        if self.in_splash() {
            if matches!(mouse.kind, MouseEventKind::Down(_)) {
                self.finish_splash(now);
            }
            return Ok(());
        }

        if self.state.has_errors() {
            if matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        let screen = self.screen();

        // The application modal captures the pointer; clicking outside closes it
        if self.application.is_some() {
            if matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left))
                && !ui::careers::modal_area(screen).contains(position)
            {
                self.close_application();
            }
            return Ok(());
        }

        let (sidebar, main) = ui::layout::create_layout(screen);

        match mouse.kind {
            MouseEventKind::ScrollDown if !self.scroll_lock.is_locked() => self.state.scroll_down(),
            MouseEventKind::ScrollUp if !self.scroll_lock.is_locked() => self.state.scroll_up(),
            MouseEventKind::Moved => self.update_hover(main, position),
            MouseEventKind::Down(MouseButton::Left) => {
                self.copy_message = None;
                if let Some(index) = ui::layout::sidebar_item_at(sidebar, position) {
                    self.navigate(View::NAVIGATION[index]);
                    return Ok(());
                }
                self.handle_carousel_press(main, position, now);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(swipe) = self.swipe.release(mouse.column) {
                    let carousel = match self.state.current_view {
                        View::Home => &mut self.hero,
                        View::Clients => &mut self.clients,
                        _ => return Ok(()),
                    };
                    match swipe {
                        Swipe::Left => carousel.next(now),
                        Swipe::Right => carousel.prev(now),
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn update_hover(&mut self, main: Rect, position: Position) {
        match self.state.current_view {
            View::Home => {
                self.state.hero_hovered = ui::home::hero_area(main).contains(position);
                self.hero.set_paused(self.state.hero_paused());
            }
            View::Clients => {
                self.state.clients_hovered = ui::clients::carousel_area(main).contains(position);
                self.clients.set_paused(self.state.clients_hovered);
            }
            _ => {}
        }
    }

    /// Indicator click or the start of a swipe inside a carousel
    fn handle_carousel_press(&mut self, main: Rect, position: Position, now: Instant) {
        let (area, carousel) = match self.state.current_view {
            View::Home => (ui::home::hero_area(main), &mut self.hero),
            View::Clients => (ui::clients::carousel_area(main), &mut self.clients),
            _ => return,
        };
        if !area.contains(position) {
            return;
        }
        let indicators = ui::components::indicator_row(area);
        if let Some(index) = ui::components::indicator_at(indicators, carousel.len(), position) {
            carousel.go_to(index, now);
            return;
        }
        self.swipe.press(position.x);
    }

    fn copy_contact_email(&mut self) {
        let Some(email) = self.content.contact_email().map(str::to_string) else {
            self.copy_message = Some("No contact e-mail available".to_string());
            return;
        };
        match self.copy_to_clipboard(&email) {
            Ok(()) => self.copy_message = Some(format!("Copied {email}")),
            Err(err) => self.push_error(format!("Could not copy to clipboard: {err}")),
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }

    /// Wait for the next relay outcome and apply it
    #[cfg(test)]
    async fn next_outcome(&mut self) {
        let outcome = self
            .outcomes_rx
            .recv()
            .await
            .expect("outcome channel closed");
        self.apply_outcome(outcome, Instant::now());
    }
}

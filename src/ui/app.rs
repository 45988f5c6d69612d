use std::sync::Arc;

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::context::AppContext;
use crate::models::{Profile, WeatherReport};
use crate::services::ServiceError;
use crate::ui::events::AppEvent;
use crate::ui::fetch::{FetchIntent, RequestToken, RequestTokens};
use crate::ui::mvi::Reducer;
use crate::ui::screens::color::{self, ColorReducer, ColorState};
use crate::ui::screens::counter::{self, CounterReducer, CounterState};
use crate::ui::screens::expenses::{
    self, ExpenseIntent, ExpenseReducer, ExpenseScreenState, FormField, FormIntent,
};
use crate::ui::screens::github::{GitHubIntent, GitHubReducer, GitHubScreenState};
use crate::ui::screens::tasks::{Pane, TaskScreenIntent, TaskScreenReducer, TaskScreenState};
use crate::ui::screens::temperature::{self, TemperatureReducer, TemperatureState};
use crate::ui::screens::tip::{self, TipReducer, TipState};
use crate::ui::screens::weather::{WeatherIntent, WeatherReducer, WeatherScreenState};
use crate::ui::screens::Screen;
use crate::ui::spawner::TaskSpawner;
use crate::ui::text_field::TextEdit;

/// Ticks a status message stays visible.
const STATUS_TICKS: u8 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// One-line message shown in the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub text: String,
    pub kind: StatusKind,
    ticks_left: u8,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    screen: Screen,
    context: AppContext,
    spawner: TaskSpawner,
    tokens: RequestTokens,
    today: NaiveDate,
    status: Option<Status>,
    counter: CounterState,
    color: ColorState,
    temperature: TemperatureState,
    tip: TipState,
    tasks: TaskScreenState,
    weather: WeatherScreenState,
    github: GitHubScreenState,
    expenses: ExpenseScreenState,
}

impl App {
    pub fn new(context: AppContext, spawner: TaskSpawner, screen: Screen, today: NaiveDate) -> Self {
        Self {
            should_quit: false,
            screen,
            context,
            spawner,
            tokens: RequestTokens::new(),
            today,
            status: None,
            counter: CounterState::default(),
            color: ColorState::default(),
            temperature: TemperatureState::default(),
            tip: TipState::default(),
            tasks: TaskScreenState::default(),
            weather: WeatherScreenState::default(),
            github: GitHubScreenState::default(),
            expenses: ExpenseScreenState::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn context(&self) -> &AppContext {
        &self.context
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn counter(&self) -> &CounterState {
        &self.counter
    }

    pub fn color(&self) -> &ColorState {
        &self.color
    }

    pub fn temperature(&self) -> &TemperatureState {
        &self.temperature
    }

    pub fn tip(&self) -> &TipState {
        &self.tip
    }

    pub fn tasks(&self) -> &TaskScreenState {
        &self.tasks
    }

    pub fn weather(&self) -> &WeatherScreenState {
        &self.weather
    }

    pub fn github(&self) -> &GitHubScreenState {
        &self.github
    }

    pub fn expenses(&self) -> &ExpenseScreenState {
        &self.expenses
    }

    pub fn on_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => self.on_key(key),
            AppEvent::Tick => self.on_tick(),
            // The next draw picks up the new size.
            AppEvent::Resize(..) => {}
            AppEvent::GitHubFetched { token, result } => self.on_github_fetched(token, result),
            AppEvent::WeatherFetched { token, result } => self.on_weather_fetched(token, result),
        }
    }

    pub fn on_tick(&mut self) {
        if let Some(status) = &mut self.status {
            status.ticks_left = status.ticks_left.saturating_sub(1);
            if status.ticks_left == 0 {
                self.status = None;
            }
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c')) {
            self.request_quit();
            return;
        }

        // Open forms own Tab for field navigation.
        if !self.is_modal() {
            match key.code {
                KeyCode::Tab => return self.switch_screen(self.screen.next()),
                KeyCode::BackTab => return self.switch_screen(self.screen.previous()),
                _ => {}
            }
        }

        match self.screen {
            Screen::Counter => {
                if let Some(intent) = counter::intent_for_key(key) {
                    dispatch_mvi!(self, counter, CounterReducer, intent);
                }
            }
            Screen::Color => {
                if let Some(intent) = color::intent_for_key(key) {
                    dispatch_mvi!(self, color, ColorReducer, intent);
                }
            }
            Screen::Temperature => {
                if let Some(intent) = temperature::intent_for_key(key) {
                    dispatch_mvi!(self, temperature, TemperatureReducer, intent);
                }
            }
            Screen::Tip => {
                if let Some(intent) = tip::intent_for_key(key) {
                    dispatch_mvi!(self, tip, TipReducer, intent);
                }
            }
            Screen::Tasks => self.on_tasks_key(key),
            Screen::Weather => self.on_weather_key(key),
            Screen::GitHub => self.on_github_key(key),
            Screen::Expenses => self.on_expenses_key(key),
        }
    }

    fn is_modal(&self) -> bool {
        self.tasks.is_editing() || self.expenses.form.is_some()
    }

    fn switch_screen(&mut self, screen: Screen) {
        tracing::debug!(from = ?self.screen, to = ?screen, "Switching screen");
        self.screen = screen;
        self.status = None;
    }

    fn set_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status = Some(Status {
            text: text.into(),
            kind,
            ticks_left: STATUS_TICKS,
        });
    }

    // Tasks

    fn on_tasks_key(&mut self, key: KeyEvent) {
        if self.tasks.is_editing() {
            match key.code {
                KeyCode::Enter => self.submit_task_draft(),
                KeyCode::Esc => {
                    dispatch_mvi!(self, tasks, TaskScreenReducer, TaskScreenIntent::CloseDraft);
                }
                _ => {
                    if let Some(edit) = TextEdit::from_key(key) {
                        dispatch_mvi!(self, tasks, TaskScreenReducer, TaskScreenIntent::EditDraft(edit));
                    }
                }
            }
            return;
        }

        match key.code {
            KeyCode::Up => self.move_task_selection(-1),
            KeyCode::Down => self.move_task_selection(1),
            KeyCode::Left => {
                dispatch_mvi!(self, tasks, TaskScreenReducer, TaskScreenIntent::Focus(Pane::Categories));
            }
            KeyCode::Right => {
                dispatch_mvi!(self, tasks, TaskScreenReducer, TaskScreenIntent::Focus(Pane::Tasks));
            }
            KeyCode::Enter if self.tasks.pane == Pane::Categories => {
                dispatch_mvi!(self, tasks, TaskScreenReducer, TaskScreenIntent::Focus(Pane::Tasks));
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_selected_task(),
            KeyCode::Char('a') => {
                if self.selected_category_id().is_some() {
                    dispatch_mvi!(self, tasks, TaskScreenReducer, TaskScreenIntent::OpenDraft);
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => match self.tasks.pane {
                Pane::Categories => self.delete_selected_category(),
                Pane::Tasks => self.delete_selected_task(),
            },
            _ => {}
        }
    }

    fn selected_category_id(&self) -> Option<uuid::Uuid> {
        self.context
            .tasks
            .categories()
            .get(self.tasks.category)
            .map(|c| c.id)
    }

    fn selected_task_count(&self) -> usize {
        self.selected_category_id()
            .map(|id| self.context.tasks.tasks_for(id).len())
            .unwrap_or(0)
    }

    fn move_task_selection(&mut self, delta: isize) {
        let len = match self.tasks.pane {
            Pane::Categories => self.context.tasks.categories().len(),
            Pane::Tasks => self.selected_task_count(),
        };
        dispatch_mvi!(self, tasks, TaskScreenReducer, TaskScreenIntent::Move { delta, len });
    }

    fn clamp_task_selection(&mut self) {
        let categories = self.context.tasks.categories().len();
        // Clamp the category first so the task count is for a real category.
        dispatch_mvi!(self, tasks, TaskScreenReducer, TaskScreenIntent::Clamp { categories, tasks: usize::MAX });
        let tasks = self.selected_task_count();
        dispatch_mvi!(self, tasks, TaskScreenReducer, TaskScreenIntent::Clamp { categories, tasks });
    }

    fn submit_task_draft(&mut self) {
        let (Some(category), Some(title)) = (self.selected_category_id(), self.tasks.draft.clone())
        else {
            return;
        };
        match self.context.tasks.add_task(category, &title) {
            Ok(_) => {
                dispatch_mvi!(self, tasks, TaskScreenReducer, TaskScreenIntent::CloseDraft);
                self.set_status(StatusKind::Info, format!("Added \"{}\"", title.trim()));
            }
            Err(err) => self.set_status(StatusKind::Error, err.to_string()),
        }
    }

    fn toggle_selected_task(&mut self) {
        let Some(category) = self.selected_category_id() else {
            return;
        };
        let Some(task_id) = self
            .context
            .tasks
            .tasks_for(category)
            .get(self.tasks.task)
            .map(|t| t.id)
        else {
            return;
        };
        if let Err(err) = self.context.tasks.toggle_task(task_id) {
            self.set_status(StatusKind::Error, err.to_string());
        }
    }

    fn delete_selected_task(&mut self) {
        let Some(category) = self.selected_category_id() else {
            return;
        };
        if self.context.tasks.delete_tasks(category, &[self.tasks.task]) > 0 {
            self.clamp_task_selection();
        }
    }

    fn delete_selected_category(&mut self) {
        let Some(category) = self.selected_category_id() else {
            return;
        };
        match self.context.tasks.delete_category(category) {
            Ok(removed) => {
                self.clamp_task_selection();
                self.set_status(StatusKind::Info, format!("Deleted category {}", removed.name));
            }
            Err(err) => self.set_status(StatusKind::Error, err.to_string()),
        }
    }

    // Weather

    fn on_weather_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.search_weather(),
            KeyCode::Esc => {
                dispatch_mvi!(self, weather, WeatherReducer, WeatherIntent::Fetch(FetchIntent::Reset));
                dispatch_mvi!(self, weather, WeatherReducer, WeatherIntent::Edit(TextEdit::Clear));
            }
            _ => {
                if let Some(edit) = TextEdit::from_key(key) {
                    dispatch_mvi!(self, weather, WeatherReducer, WeatherIntent::Edit(edit));
                }
            }
        }
    }

    fn search_weather(&mut self) {
        if !self.weather.can_search() {
            return;
        }
        let token = self.tokens.issue();
        dispatch_mvi!(self, weather, WeatherReducer, WeatherIntent::Fetch(FetchIntent::Start { token }));

        let city = self.weather.city.trim().to_string();
        let service = Arc::clone(&self.context.weather);
        tracing::debug!(token = token.value(), %city, "Weather search issued");
        self.spawner.spawn(async move {
            let result = service.lock().await.fetch_weather(&city).await;
            AppEvent::WeatherFetched { token, result }
        });
    }

    fn on_weather_fetched(&mut self, token: RequestToken, result: Result<WeatherReport, ServiceError>) {
        if !self.weather.fetch.awaits(token) {
            tracing::debug!(token = token.value(), "Discarding superseded weather result");
        }
        let intent = match result {
            Ok(value) => FetchIntent::Succeeded { token, value },
            Err(err) => FetchIntent::Failed {
                token,
                message: err.to_string(),
            },
        };
        dispatch_mvi!(self, weather, WeatherReducer, WeatherIntent::Fetch(intent));
    }

    // GitHub

    fn on_github_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter => self.search_github(),
            KeyCode::Up => {
                dispatch_mvi!(self, github, GitHubReducer, GitHubIntent::Move(-1));
            }
            KeyCode::Down => {
                dispatch_mvi!(self, github, GitHubReducer, GitHubIntent::Move(1));
            }
            KeyCode::Char('f') if ctrl => self.toggle_selected_favorite(),
            KeyCode::Esc => {
                dispatch_mvi!(self, github, GitHubReducer, GitHubIntent::Fetch(FetchIntent::Reset));
                dispatch_mvi!(self, github, GitHubReducer, GitHubIntent::Edit(TextEdit::Clear));
            }
            _ => {
                if let Some(edit) = TextEdit::from_key(key) {
                    dispatch_mvi!(self, github, GitHubReducer, GitHubIntent::Edit(edit));
                }
            }
        }
    }

    fn search_github(&mut self) {
        if !self.github.can_search() {
            return;
        }
        let token = self.tokens.issue();
        dispatch_mvi!(self, github, GitHubReducer, GitHubIntent::Fetch(FetchIntent::Start { token }));

        let username = self.github.username.trim().to_string();
        let service = self.context.github.clone();
        tracing::debug!(token = token.value(), %username, "GitHub search issued");
        self.spawner.spawn(async move {
            let result = service.fetch_profile(&username).await;
            AppEvent::GitHubFetched { token, result }
        });
    }

    fn on_github_fetched(&mut self, token: RequestToken, result: Result<Profile, ServiceError>) {
        if !self.github.fetch.awaits(token) {
            tracing::debug!(token = token.value(), "Discarding superseded GitHub result");
        }
        let intent = match result {
            Ok(value) => FetchIntent::Succeeded { token, value },
            Err(err) => FetchIntent::Failed {
                token,
                message: err.to_string(),
            },
        };
        dispatch_mvi!(self, github, GitHubReducer, GitHubIntent::Fetch(intent));
    }

    fn toggle_selected_favorite(&mut self) {
        let Some(repo) = self.github.selected_repository().cloned() else {
            return;
        };
        match self.context.favorites.toggle_favorite(&repo) {
            Ok(true) => self.set_status(StatusKind::Info, format!("Added {} to favorites", repo.name)),
            Ok(false) => {
                self.set_status(StatusKind::Info, format!("Removed {} from favorites", repo.name))
            }
            Err(err) => self.set_status(StatusKind::Error, format!("Favorites not saved: {err}")),
        }
    }

    // Expenses

    fn on_expenses_key(&mut self, key: KeyEvent) {
        if let Some(form) = &self.expenses.form {
            let on_category = form.field == FormField::Category;
            let intent = match key.code {
                KeyCode::Enter => return self.submit_expense_form(),
                KeyCode::Esc => {
                    dispatch_mvi!(self, expenses, ExpenseReducer, ExpenseIntent::CloseForm);
                    return;
                }
                KeyCode::Tab | KeyCode::Down => Some(FormIntent::NextField),
                KeyCode::BackTab | KeyCode::Up => Some(FormIntent::PreviousField),
                KeyCode::Right if on_category => Some(FormIntent::NextCategory),
                KeyCode::Left if on_category => Some(FormIntent::PreviousCategory),
                _ => TextEdit::from_key(key).map(FormIntent::Edit),
            };
            if let Some(intent) = intent {
                dispatch_mvi!(self, expenses, ExpenseReducer, ExpenseIntent::Form(intent));
            }
            return;
        }

        let len = self.context.expenses.expenses().len();
        match key.code {
            KeyCode::Up => {
                dispatch_mvi!(self, expenses, ExpenseReducer, ExpenseIntent::Move { delta: -1, len });
            }
            KeyCode::Down => {
                dispatch_mvi!(self, expenses, ExpenseReducer, ExpenseIntent::Move { delta: 1, len });
            }
            KeyCode::Char('a') => {
                dispatch_mvi!(self, expenses, ExpenseReducer, ExpenseIntent::OpenForm);
            }
            KeyCode::Char('s') => {
                dispatch_mvi!(self, expenses, ExpenseReducer, ExpenseIntent::ToggleOrder);
            }
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected_expense(),
            _ => {}
        }
    }

    fn submit_expense_form(&mut self) {
        let Some(form) = &self.expenses.form else {
            return;
        };
        match form.to_expense(self.today) {
            Ok(expense) => {
                let title = expense.title.clone();
                self.context.expenses.add_expense(expense);
                dispatch_mvi!(self, expenses, ExpenseReducer, ExpenseIntent::CloseForm);
                self.set_status(StatusKind::Info, format!("Added {title}"));
            }
            Err(err) => self.set_status(StatusKind::Error, err.to_string()),
        }
    }

    fn delete_selected_expense(&mut self) {
        let rows = expenses::displayed(&self.context.expenses, self.expenses.order);
        let Some(id) = rows.get(self.expenses.selected).map(|e| e.id) else {
            return;
        };
        let Some(position) = self.context.expenses.expenses().iter().position(|e| e.id == id) else {
            return;
        };

        let removed = self.context.expenses.delete_expenses(&[position]);
        let len = self.context.expenses.expenses().len();
        dispatch_mvi!(self, expenses, ExpenseReducer, ExpenseIntent::Clamp { len });
        if let Some(expense) = removed.first() {
            self.set_status(StatusKind::Info, format!("Deleted {}", expense.title));
        }
    }
}

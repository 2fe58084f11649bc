// crates/pulse-terminal/src/app.rs

use chrono::{DateTime, Local};
use indexmap::IndexMap;
use pulse_core::{
    Interpretation, OrderRequest, PresetDraft, PresetField, PresetList, Stock, VoiceInterpreter,
};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{info, warn};

use crate::config::ClientConfig;
use crate::gateway::{GatewayError, Submission, SubmissionId, SubmissionResult};
use crate::speech::{KeyboardDictation, SpeechCapture};

pub const NO_SPEECH: &str = "No speech detected. Please try again.";
pub const NO_PRESET_SELECTED: &str = "No preset selected. Please choose a preset.";
pub const NO_PRESETS: &str =
    "You don't have any presets. Please create a preset in the config page.";
pub const ORDER_FAILED: &str = "Order placement failed.";
pub const ORDER_ERROR: &str = "An error occurred while placing the order.";

pub enum InputMode {
    Normal,
    /// Voice capture is running; keystrokes go to the transcript.
    Listening,
    /// Trade dialog is open.
    Dialog,
    /// Typing into the preset form.
    EditingPreset,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Orders,
    Positions,
    Account,
    Tools,
    Preset,
}

impl Page {
    pub const ALL: [Page; 6] = [
        Page::Dashboard,
        Page::Orders,
        Page::Positions,
        Page::Account,
        Page::Tools,
        Page::Preset,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Orders => "Orders",
            Page::Positions => "Positions",
            Page::Account => "Account",
            Page::Tools => "Tools",
            Page::Preset => "Preset",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Page::Dashboard => "/dashboard",
            Page::Orders => "/orders",
            Page::Positions => "/positions",
            Page::Account => "/account",
            Page::Tools => "/tools",
            Page::Preset => "/preset",
        }
    }

    /// Case-insensitive lookup by title. Unknown names go nowhere.
    pub fn from_name(name: &str) -> Option<Page> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.title().eq_ignore_ascii_case(name))
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// The last message shown to the trader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderSource {
    Voice,
    Dialog,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Completed,
    Failed(String),
}

/// Why a submission did not complete.
enum Failure {
    /// The API answered with a non-200 status.
    Status(u16),
    /// The request never got an answer.
    Error(String),
}

#[derive(Debug, Clone)]
pub struct SubmittedOrder {
    pub id: SubmissionId,
    pub request: OrderRequest,
    pub source: OrderSource,
    pub status: OrderStatus,
    pub timestamp: DateTime<Local>,
}

/// Preset picker shown over the dashboard for one stock.
#[derive(Debug, Clone)]
pub struct TradeDialog {
    pub stock: Stock,
    pub selected: Option<usize>,
    pub status: Option<String>,
    /// Submission in flight; execute is disabled meanwhile.
    pub pending: Option<SubmissionId>,
}

impl TradeDialog {
    pub fn new(stock: Stock) -> Self {
        Self {
            stock,
            selected: None,
            status: None,
            pending: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Completed orders render as success, everything else as an error.
    pub fn status_is_success(&self) -> bool {
        self.status
            .as_deref()
            .is_some_and(|s| s.contains("completed"))
    }
}

pub struct App {
    // Session
    pub user_id: String,
    pub submission_url: Option<String>,
    pub logged_out: bool,

    // UI state
    pub input_mode: InputMode,
    pub current_page: Page,
    pub should_quit: bool,
    pub show_help: bool,
    pub notice: Option<Notice>,

    // Voice
    pub interpreter: VoiceInterpreter,
    pub speech: KeyboardDictation,

    // Dashboard and trade dialog
    pub watchlist: Vec<Stock>,
    pub selected_stock_index: usize,
    pub trade_dialog: Option<TradeDialog>,

    // Preset page
    pub preset_draft: PresetDraft,
    pub preset_field: PresetField,
    pub user_presets: PresetList,
    pub selected_preset_index: usize,

    // Orders
    pub orders: IndexMap<SubmissionId, SubmittedOrder>,
    pub selected_order_index: usize,
    pub next_order_id: SubmissionId,

    pub order_tx: Option<UnboundedSender<Submission>>,
}

impl App {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            user_id: config.user_id.clone(),
            submission_url: config.submission_url().map(str::to_string),
            logged_out: false,
            input_mode: InputMode::Normal,
            current_page: Page::Dashboard,
            should_quit: false,
            show_help: false,
            notice: None,
            interpreter: config.interpreter(),
            speech: KeyboardDictation::new(),
            watchlist: config.watchlist.clone(),
            selected_stock_index: 0,
            trade_dialog: None,
            preset_draft: PresetDraft::default(),
            preset_field: PresetField::PresetName,
            user_presets: PresetList::new(),
            selected_preset_index: 0,
            orders: IndexMap::new(),
            selected_order_index: 0,
            next_order_id: 1,
            order_tx: None,
        }
    }

    pub fn set_order_sender(&mut self, tx: UnboundedSender<Submission>) {
        self.order_tx = Some(tx);
    }

    // ----- navigation -----

    pub fn navigate(&mut self, page: Page) {
        info!(path = page.path(), "navigate");
        self.current_page = page;
    }

    /// Navigate by page name; unknown names are ignored.
    pub fn navigate_to(&mut self, name: &str) {
        if let Some(page) = Page::from_name(name) {
            self.navigate(page);
        }
    }

    pub fn next_page(&mut self) {
        let idx = (self.current_page.index() + 1) % Page::ALL.len();
        self.navigate(Page::ALL[idx]);
    }

    pub fn prev_page(&mut self) {
        let idx = (self.current_page.index() + Page::ALL.len() - 1) % Page::ALL.len();
        self.navigate(Page::ALL[idx]);
    }

    pub fn logout(&mut self) {
        info!(user = %self.user_id, "logout");
        self.user_id.clear();
        self.logged_out = true;
        self.should_quit = true;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    fn notify(&mut self, kind: NoticeKind, text: impl Into<String>) {
        self.notice = Some(Notice {
            kind,
            text: text.into(),
        });
    }

    pub fn move_selection_up(&mut self) {
        let idx = match self.current_page {
            Page::Dashboard => &mut self.selected_stock_index,
            Page::Orders => &mut self.selected_order_index,
            Page::Preset => &mut self.selected_preset_index,
            _ => return,
        };
        *idx = idx.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self) {
        let (idx, len) = match self.current_page {
            Page::Dashboard => (&mut self.selected_stock_index, self.watchlist.len()),
            Page::Orders => (&mut self.selected_order_index, self.orders.len()),
            Page::Preset => (&mut self.selected_preset_index, self.user_presets.len()),
            _ => return,
        };
        if *idx + 1 < len {
            *idx += 1;
        }
    }

    // ----- voice -----

    pub fn start_listening(&mut self) {
        self.speech.start();
        self.speech.reset_transcript();
        self.input_mode = InputMode::Listening;
        info!("voice capture started");
    }

    pub fn hear_char(&mut self, c: char) {
        self.speech.hear(c);
    }

    pub fn unhear_char(&mut self) {
        self.speech.backspace();
    }

    /// Stop listening and act on whatever was heard.
    pub fn stop_listening(&mut self) {
        self.speech.stop();
        self.input_mode = InputMode::Normal;

        let transcript = self.speech.transcript().to_string();
        if transcript.trim().is_empty() {
            self.notify(NoticeKind::Error, NO_SPEECH);
            return;
        }

        self.handle_command(&transcript);
        self.speech.reset_transcript();
    }

    /// Stop listening and throw the transcript away.
    pub fn abort_listening(&mut self) {
        self.speech.stop();
        self.speech.reset_transcript();
        self.input_mode = InputMode::Normal;
    }

    pub fn handle_command(&mut self, transcript: &str) {
        match self.interpreter.interpret(transcript) {
            Interpretation::Executed(order) => {
                info!(
                    action = %order.action,
                    quantity = order.quantity,
                    price = %order.price,
                    symbol = %order.symbol,
                    "voice order"
                );
                self.notify(NoticeKind::Success, order.to_string());

                let stock = self.watchlist.iter().find(|s| s.symbol == order.symbol);
                let request = OrderRequest::from_executed(&order, stock, self.user_id.clone());
                self.submit(request, OrderSource::Voice);
            }
            Interpretation::Rejected(reason) => {
                warn!(transcript, "voice command rejected: {}", reason);
                self.notify(NoticeKind::Error, reason.to_string());
            }
        }
    }

    // ----- trade dialog -----

    pub fn open_trade_dialog(&mut self) {
        if let Some(stock) = self.watchlist.get(self.selected_stock_index) {
            self.trade_dialog = Some(TradeDialog::new(stock.clone()));
            self.input_mode = InputMode::Dialog;
        }
    }

    pub fn close_trade_dialog(&mut self) {
        self.trade_dialog = None;
        self.input_mode = InputMode::Normal;
    }

    pub fn dialog_select_next(&mut self) {
        let count = self.interpreter.presets().len();
        if let Some(dialog) = self.trade_dialog.as_mut() {
            if count == 0 {
                return;
            }
            dialog.selected = Some(match dialog.selected {
                Some(i) if i + 1 < count => i + 1,
                Some(i) => i,
                None => 0,
            });
        }
    }

    pub fn dialog_select_prev(&mut self) {
        if let Some(dialog) = self.trade_dialog.as_mut() {
            if let Some(i) = dialog.selected {
                dialog.selected = Some(i.saturating_sub(1));
            }
        }
    }

    pub fn execute_dialog_order(&mut self) {
        let Some(dialog) = self.trade_dialog.as_ref() else {
            return;
        };
        if dialog.is_loading() {
            return;
        }

        let preset = dialog
            .selected
            .and_then(|i| self.interpreter.presets().iter().nth(i))
            .map(|(_, preset)| preset.clone());
        let Some(preset) = preset else {
            if let Some(dialog) = self.trade_dialog.as_mut() {
                dialog.status = Some(NO_PRESET_SELECTED.to_string());
            }
            return;
        };

        let request = OrderRequest::from_preset(&dialog.stock, &preset, self.user_id.clone());
        let id = self.record(request, OrderSource::Dialog);
        if let Some(dialog) = self.trade_dialog.as_mut() {
            dialog.pending = Some(id);
            dialog.status = None;
        }
        self.dispatch(id);
    }

    // ----- orders -----

    fn submit(&mut self, request: OrderRequest, source: OrderSource) -> SubmissionId {
        let id = self.record(request, source);
        self.dispatch(id);
        id
    }

    fn record(&mut self, request: OrderRequest, source: OrderSource) -> SubmissionId {
        let id = self.next_order_id;
        self.next_order_id += 1;
        self.orders.insert(
            id,
            SubmittedOrder {
                id,
                request,
                source,
                status: OrderStatus::Pending,
                timestamp: Local::now(),
            },
        );
        id
    }

    fn dispatch(&mut self, id: SubmissionId) {
        let Some(request) = self.orders.get(&id).map(|o| o.request.clone()) else {
            return;
        };
        let sent = self
            .order_tx
            .as_ref()
            .is_some_and(|tx| tx.send(Submission { id, request }).is_ok());
        if !sent {
            warn!(id, "order gateway unavailable");
            self.apply_outcome(id, Err(Failure::Error("order gateway unavailable".into())));
        }
    }

    pub fn handle_submission_result(&mut self, result: SubmissionResult) {
        let outcome = result.outcome.map_err(|e| match e {
            GatewayError::Status(code) => Failure::Status(code),
            GatewayError::Transport(err) => Failure::Error(err.to_string()),
        });
        self.apply_outcome(result.id, outcome);
    }

    fn apply_outcome(&mut self, id: SubmissionId, outcome: Result<(), Failure>) {
        let Some(order) = self.orders.get_mut(&id) else {
            return;
        };

        let message = match &outcome {
            Ok(()) => order.request.completed_message(),
            Err(Failure::Status(_)) => ORDER_FAILED.to_string(),
            Err(Failure::Error(_)) => ORDER_ERROR.to_string(),
        };
        order.status = match outcome {
            Ok(()) => OrderStatus::Completed,
            Err(Failure::Status(code)) => OrderStatus::Failed(format!("HTTP {code}")),
            Err(Failure::Error(reason)) => OrderStatus::Failed(reason),
        };
        let failed = order.status != OrderStatus::Completed;
        let source = order.source;

        match source {
            OrderSource::Dialog => {
                if let Some(dialog) = self
                    .trade_dialog
                    .as_mut()
                    .filter(|d| d.pending == Some(id))
                {
                    dialog.pending = None;
                    dialog.status = Some(message);
                }
            }
            OrderSource::Voice if failed => self.notify(NoticeKind::Error, message),
            OrderSource::Voice => {}
        }
    }

    /// Net filled quantity per symbol (buys positive, sells negative),
    /// from completed orders, in first-traded order.
    pub fn positions(&self) -> IndexMap<String, i64> {
        let mut positions = IndexMap::new();
        for order in self.orders.values() {
            if order.status != OrderStatus::Completed {
                continue;
            }
            let qty = i64::from(order.request.qty);
            let signed = match order.request.order_type {
                pulse_core::Side::Buy => qty,
                pulse_core::Side::Sell => -qty,
            };
            *positions.entry(order.request.symbol.clone()).or_insert(0) += signed;
        }
        positions
    }

    // ----- preset page -----

    pub fn start_preset_editing(&mut self) {
        self.navigate(Page::Preset);
        self.input_mode = InputMode::EditingPreset;
    }

    pub fn stop_preset_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn next_preset_field(&mut self) {
        self.preset_field = self.preset_field.next();
    }

    pub fn prev_preset_field(&mut self) {
        self.preset_field = self.preset_field.prev();
    }

    pub fn enter_preset_char(&mut self, c: char) {
        self.preset_draft.field_mut(self.preset_field).push(c);
    }

    pub fn delete_preset_char(&mut self) {
        self.preset_draft.field_mut(self.preset_field).pop();
    }

    pub fn add_preset(&mut self) {
        let added = self.user_presets.add(&mut self.preset_draft);
        info!(
            name = %added.preset_name,
            stop_loss = %added.stop_loss,
            take_profit = %added.take_profit,
            "preset added"
        );
        self.preset_field = PresetField::PresetName;
        self.input_mode = InputMode::Normal;
        self.selected_preset_index = self.user_presets.len().saturating_sub(1);
    }

    pub fn delete_selected_preset(&mut self) {
        if let Some(removed) = self.user_presets.remove(self.selected_preset_index) {
            info!(name = %removed.preset_name, "preset deleted");
        }
        if self.selected_preset_index >= self.user_presets.len() {
            self.selected_preset_index = self.user_presets.len().saturating_sub(1);
        }
    }
}

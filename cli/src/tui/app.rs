use ratatui::widgets::TableState;
use taskdeck_client::{
    dispatch, HttpTaskApi, LocalTaskApi, TaskApi, TaskCommand, TaskListController,
};
use taskdeck_core::{FileTaskStore, TaskService};

pub enum InputMode {
    Normal,
    Adding,
}

/// TUI state: the task-list controller plus terminal-only concerns
/// (selection, input line). All task mutations flow controller -> command
/// -> API -> response handler; the app never edits the task list directly.
pub struct App {
    api: Box<dyn TaskApi>,
    pub controller: TaskListController,
    pub state: TableState,
    pub input: String,
    pub input_mode: InputMode,
    pub cursor_position: usize,
}

impl App {
    pub fn with_local_api(service: TaskService<FileTaskStore>) -> App {
        Self::new(Box::new(LocalTaskApi::new(service)))
    }

    pub fn with_http_api(base_url: String) -> App {
        Self::new(Box::new(HttpTaskApi::new(base_url)))
    }

    fn new(api: Box<dyn TaskApi>) -> App {
        let mut app = App {
            api,
            controller: TaskListController::new(),
            state: TableState::default(),
            input: String::new(),
            input_mode: InputMode::Normal,
            cursor_position: 0,
        };
        app.reload();
        app
    }

    fn run(&mut self, command: Option<TaskCommand>) {
        if let Some(command) = command {
            dispatch(&mut self.controller, self.api.as_ref(), command);
        }
    }

    pub fn reload(&mut self) {
        let command = self.controller.load();
        self.run(command);
        self.fix_selection();
    }

    pub fn next(&mut self) {
        let len = self.controller.state().tasks().len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let len = self.controller.state().tasks().len();
        if len == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn delete_selected(&mut self) {
        if let Some(i) = self.state.selected() {
            let id = self.controller.state().tasks().get(i).map(|t| t.id);
            if let Some(id) = id {
                let command = self.controller.delete_task(&id);
                self.run(command);
            }
            self.fix_selection();
        }
    }

    pub fn request_delete_all(&mut self) {
        self.controller.request_delete_all();
    }

    pub fn confirm_delete_all(&mut self) {
        let command = self.controller.confirm_delete_all();
        self.run(command);
        self.fix_selection();
    }

    pub fn cancel_delete_all(&mut self) {
        self.controller.cancel_delete_all();
    }

    pub fn enter_add_mode(&mut self) {
        self.input_mode = InputMode::Adding;
        self.input.clear();
        self.cursor_position = 0;
    }

    pub fn exit_input_mode(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn input_char(&mut self, c: char) {
        let byte_index = self
            .input
            .chars()
            .take(self.cursor_position)
            .map(|c| c.len_utf8())
            .sum();
        self.input.insert(byte_index, c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let byte_index: usize = self
                .input
                .chars()
                .take(self.cursor_position - 1)
                .map(|c| c.len_utf8())
                .sum();
            self.input.remove(byte_index);
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    pub fn submit_input(&mut self) {
        let title = self.input.trim().to_string();
        self.input.clear();
        self.cursor_position = 0;
        self.exit_input_mode();

        if title.is_empty() {
            return;
        }

        let command = self.controller.submit_new(&title);
        self.run(command);
        if self.state.selected().is_none() && !self.controller.state().tasks().is_empty() {
            self.state.select(Some(0));
        }
    }

    fn fix_selection(&mut self) {
        let len = self.controller.state().tasks().len();
        match self.state.selected() {
            _ if len == 0 => self.state.select(None),
            Some(i) if i >= len => self.state.select(Some(len - 1)),
            Some(_) => {}
            None => self.state.select(Some(0)),
        }
    }
}

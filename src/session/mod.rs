pub mod command;
pub mod prompt;

pub use command::{Command, HELP};
pub use prompt::Prompter;

use anyhow::Result;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::path::Path;

use crate::config::Config;
use crate::model::{Assignment, Category, Course, ValidationError};
use crate::output;
use crate::storage;

const BAD_COMMAND: &str = "Unrecognized command. Try \"help\" for a list of commands.";
const NO_COURSE: &str = "No course loaded. Use \"new course\" or \"open\" to load one.";
const FILENAME_MISSING: &str = "Filename missing.";

/// Display settings for a session
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub prompt: String,
    pub precision: usize,
    pub use_colors: bool,
}

impl SessionSettings {
    pub fn from_config(config: &Config, is_terminal: bool) -> Self {
        Self {
            prompt: config.prompt().to_string(),
            precision: config.precision(),
            use_colors: config.use_colors(is_terminal),
        }
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::from_config(&Config::default(), false)
    }
}

/// Whether the session keeps reading commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Unwrap a prompt reply, ending the session when input is exhausted
macro_rules! reply {
    ($e:expr) => {
        match $e? {
            Some(value) => value,
            None => return Ok(Flow::Exit),
        }
    };
}

/// Interactive command loop over a course.
///
/// Prompts and results go to `out`, error messages to `err`.
pub struct Session<R, W, E> {
    prompter: Prompter<R, W>,
    err: E,
    course: Option<Course>,
    settings: SessionSettings,
}

impl<R: BufRead, W: Write, E: Write> Session<R, W, E> {
    pub fn new(input: R, out: W, err: E, settings: SessionSettings) -> Self {
        Self {
            prompter: Prompter::new(input, out),
            err,
            course: None,
            settings,
        }
    }

    /// Currently loaded course, if any
    pub fn course(&self) -> Option<&Course> {
        self.course.as_ref()
    }

    /// Run until end of input
    pub fn run(&mut self) -> Result<()> {
        loop {
            let prompt = self.settings.prompt.clone();
            let Some(line) = self.prompter.line(&prompt)? else {
                writeln!(self.prompter.writer())?;
                return Ok(());
            };

            let command = Command::parse(&line);
            tracing::debug!("command: {:?}", command);

            if self.dispatch(command)? == Flow::Exit {
                writeln!(self.prompter.writer())?;
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Open(path) => self.open(path),
            Command::Save(path) => self.save(path),
            Command::NewCourse => self.new_course(),
            Command::CourseInfo => self.course_info(),
            Command::Categories => self.list_categories(),
            Command::CategoryInfo => self.category_info(),
            Command::Assignments => self.list_assignments(),
            Command::AssignmentInfo => self.assignment_info(),
            Command::AddCategory => self.add_category(),
            Command::AddAssignment => self.add_assignment(),
            Command::UpdateCourse => self.update_course(),
            Command::UpdateCategory => self.update_category(),
            Command::UpdateAssignment => self.update_assignment(),
            Command::RemoveCategory => self.remove_category(),
            Command::RemoveAssignment => self.remove_assignment(),
            Command::Grade => self.grade(),
            Command::Help => self.say(HELP),
            Command::Blank => Ok(Flow::Continue),
            Command::Unknown(_) => self.complain(BAD_COMMAND),
        }
    }

    fn say(&mut self, message: impl Display) -> Result<Flow> {
        writeln!(self.prompter.writer(), "{}", message)?;
        Ok(Flow::Continue)
    }

    fn complain(&mut self, message: impl Display) -> Result<Flow> {
        writeln!(self.err, "{}", message)?;
        Ok(Flow::Continue)
    }

    fn open(&mut self, path: Option<String>) -> Result<Flow> {
        let Some(path) = path else {
            return self.complain(FILENAME_MISSING);
        };

        // A failed load leaves the current course in place
        match storage::load_course(Path::new(&path)) {
            Ok(course) => {
                let message = format!("opened course '{}'", course.name);
                self.course = Some(course);
                self.say(message)
            }
            Err(e) => self.complain(format!("Error reading course: {}", e)),
        }
    }

    fn save(&mut self, path: Option<String>) -> Result<Flow> {
        let Some(course) = self.course.as_ref() else {
            return self.complain(NO_COURSE);
        };
        let Some(path) = path else {
            return self.complain(FILENAME_MISSING);
        };

        match storage::save_course(Path::new(&path), course) {
            Ok(()) => self.say(format!("saved course to {}", path)),
            Err(e) => self.complain(format!("Error writing course: {}", e)),
        }
    }

    fn new_course(&mut self) -> Result<Flow> {
        let name = reply!(self.prompter.line("course name: "));
        self.course = Some(Course::new(name));
        Ok(Flow::Continue)
    }

    fn course_info(&mut self) -> Result<Flow> {
        let Some(course) = self.course.as_ref() else {
            return self.complain(NO_COURSE);
        };
        let info = output::format_course_info(course);
        self.say(info)
    }

    fn list_categories(&mut self) -> Result<Flow> {
        let Some(course) = self.course.as_ref() else {
            return self.complain(NO_COURSE);
        };
        let listing = output::format_category_list(course, self.settings.use_colors);
        self.say(listing)
    }

    fn category_info(&mut self) -> Result<Flow> {
        let Some(course) = self.course.as_ref() else {
            return self.complain(NO_COURSE);
        };
        let prefix = reply!(self.prompter.line("category id: "));
        let info = match course.find_category(&prefix) {
            Ok(category) => output::format_category_detail(category, self.settings.precision),
            Err(e) => return self.complain(e),
        };
        self.say(info)
    }

    fn list_assignments(&mut self) -> Result<Flow> {
        let Some(course) = self.course.as_ref() else {
            return self.complain(NO_COURSE);
        };
        let prefix = reply!(self.prompter.line("category id: "));
        let listing = match course.find_category(&prefix) {
            Ok(category) => output::format_assignment_list(category, self.settings.use_colors),
            Err(e) => return self.complain(e),
        };
        self.say(listing)
    }

    fn assignment_info(&mut self) -> Result<Flow> {
        let Some(course) = self.course.as_ref() else {
            return self.complain(NO_COURSE);
        };
        let category_prefix = reply!(self.prompter.line("category id: "));
        let category = match course.find_category(&category_prefix) {
            Ok(category) => category,
            Err(e) => return self.complain(e),
        };
        let assignment_prefix = reply!(self.prompter.line("assignment id: "));
        let info = match category.find_assignment(&assignment_prefix) {
            Ok(assignment) => {
                output::format_assignment_detail(assignment, self.settings.precision)
            }
            Err(e) => return self.complain(e),
        };
        self.say(info)
    }

    fn add_category(&mut self) -> Result<Flow> {
        let Some(course) = self.course.as_mut() else {
            return self.complain(NO_COURSE);
        };
        let name = reply!(self.prompter.line("name: "));
        let weight = reply!(self.prompter.number("weight"));
        let use_weights = reply!(self.prompter.yes_no("uses weights"));

        match Category::new(name, weight, use_weights) {
            Ok(category) => {
                let id = course.add_category(category);
                self.say(format!("added category {}", id))
            }
            Err(e) => self.complain(format!("Error creating category: {}", e)),
        }
    }

    fn add_assignment(&mut self) -> Result<Flow> {
        let Some(course) = self.course.as_mut() else {
            return self.complain(NO_COURSE);
        };
        let prefix = reply!(self.prompter.line("category id: "));
        let category = match course.find_category_mut(&prefix) {
            Ok(category) => category,
            Err(e) => return self.complain(e),
        };
        let name = reply!(self.prompter.line("name: "));
        let weight = reply!(self.prompter.number("weight"));
        let earned = reply!(self.prompter.number("earned points"));
        let possible = reply!(self.prompter.number("possible points"));

        match Assignment::new(name, weight, earned, possible) {
            Ok(assignment) => {
                let id = category.add_assignment(assignment);
                self.say(format!("added assignment {}", id))
            }
            Err(e) => self.complain(format!("Error creating assignment: {}", e)),
        }
    }

    fn update_course(&mut self) -> Result<Flow> {
        let Some(course) = self.course.as_mut() else {
            return self.complain(NO_COURSE);
        };
        course.name = reply!(self.prompter.text_with_default("course name", &course.name));
        Ok(Flow::Continue)
    }

    fn update_category(&mut self) -> Result<Flow> {
        let Some(course) = self.course.as_mut() else {
            return self.complain(NO_COURSE);
        };
        let prefix = reply!(self.prompter.line("category id: "));
        let category = match course.find_category_mut(&prefix) {
            Ok(category) => category,
            Err(e) => return self.complain(e),
        };
        let name = reply!(self.prompter.text_with_default("name", &category.name));
        let weight = reply!(self.prompter.number_with_default("weight", category.weight()));
        let use_weights =
            reply!(self.prompter.yes_no_with_default("uses weights", category.use_weights));

        // Changes land together or not at all
        let mut updated = category.clone();
        updated.name = name;
        updated.use_weights = use_weights;
        match updated.set_weight(weight) {
            Ok(()) => {
                let message = format!("updated category {}", updated.id());
                *category = updated;
                self.say(message)
            }
            Err(e) => self.complain(format!("Error updating category: {}", e)),
        }
    }

    fn update_assignment(&mut self) -> Result<Flow> {
        let Some(course) = self.course.as_mut() else {
            return self.complain(NO_COURSE);
        };
        let category_prefix = reply!(self.prompter.line("category id: "));
        let category = match course.find_category_mut(&category_prefix) {
            Ok(category) => category,
            Err(e) => return self.complain(e),
        };
        let assignment_prefix = reply!(self.prompter.line("assignment id: "));
        let assignment = match category.find_assignment_mut(&assignment_prefix) {
            Ok(assignment) => assignment,
            Err(e) => return self.complain(e),
        };
        let name = reply!(self.prompter.text_with_default("name", &assignment.name));
        let weight = reply!(self.prompter.number_with_default("weight", assignment.weight()));
        let earned =
            reply!(self.prompter.number_with_default("earned points", assignment.earned()));
        let possible =
            reply!(self.prompter.number_with_default("possible points", assignment.possible()));

        let mut updated = assignment.clone();
        updated.name = name;
        match set_points(&mut updated, weight, earned, possible) {
            Ok(()) => {
                let message = format!("updated assignment {}", updated.id());
                *assignment = updated;
                self.say(message)
            }
            Err(e) => self.complain(format!("Error updating assignment: {}", e)),
        }
    }

    fn remove_category(&mut self) -> Result<Flow> {
        let Some(course) = self.course.as_mut() else {
            return self.complain(NO_COURSE);
        };
        let prefix = reply!(self.prompter.line("category id: "));
        let id = match course.find_category(&prefix) {
            Ok(category) => category.id(),
            Err(e) => return self.complain(e),
        };
        match course.remove_category(&id) {
            Some(category) => self.say(format!("removed category {} ({})", id, category.name)),
            None => Ok(Flow::Continue),
        }
    }

    fn remove_assignment(&mut self) -> Result<Flow> {
        let Some(course) = self.course.as_mut() else {
            return self.complain(NO_COURSE);
        };
        let category_prefix = reply!(self.prompter.line("category id: "));
        let category = match course.find_category_mut(&category_prefix) {
            Ok(category) => category,
            Err(e) => return self.complain(e),
        };
        let assignment_prefix = reply!(self.prompter.line("assignment id: "));
        let id = match category.find_assignment(&assignment_prefix) {
            Ok(assignment) => assignment.id(),
            Err(e) => return self.complain(e),
        };
        match category.remove_assignment(&id) {
            Some(assignment) => {
                self.say(format!("removed assignment {} ({})", id, assignment.name))
            }
            None => Ok(Flow::Continue),
        }
    }

    fn grade(&mut self) -> Result<Flow> {
        let Some(course) = self.course.as_ref() else {
            return self.complain(NO_COURSE);
        };
        match course.score_breakdown() {
            Ok(result) => {
                let report = output::format_breakdown(
                    &result,
                    self.settings.precision,
                    self.settings.use_colors,
                );
                self.say(report)
            }
            Err(e) => self.complain(format!("Error computing grade: {}", e)),
        }
    }
}

fn set_points(
    assignment: &mut Assignment,
    weight: f64,
    earned: f64,
    possible: f64,
) -> Result<(), ValidationError> {
    assignment.set_weight(weight)?;
    assignment.set_earned(earned)?;
    assignment.set_possible(possible)?;
    Ok(())
}

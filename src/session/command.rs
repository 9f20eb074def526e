/// A single line of interactive input, parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Open(Option<String>),
    Save(Option<String>),
    NewCourse,
    CourseInfo,
    Categories,
    CategoryInfo,
    Assignments,
    AssignmentInfo,
    AddCategory,
    AddAssignment,
    UpdateCourse,
    UpdateCategory,
    UpdateAssignment,
    RemoveCategory,
    RemoveAssignment,
    Grade,
    Help,
    Blank,
    Unknown(String),
}

pub const HELP: &str = "Commands:
\topen <file>
\tsave <file>
\tnew course
\tcourse info
\tcategories
\tcategory info
\tassignments
\tassignment info
\tadd category
\tadd assignment
\tupdate course
\tupdate category
\tupdate assignment
\tremove category
\tremove assignment
\tgrade
\thelp
Send EOF (Ctrl+D) to exit.";

impl Command {
    /// Parse a line. Words are matched with whitespace normalized; the file
    /// argument of `open`/`save` is taken verbatim (minus surrounding spaces).
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        if line.is_empty() {
            return Command::Blank;
        }

        let (head, rest) = match line.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (line, ""),
        };
        let argument = if rest.is_empty() {
            None
        } else {
            Some(rest.to_string())
        };

        match head {
            "open" => return Command::Open(argument),
            "save" => return Command::Save(argument),
            _ => {}
        }

        let words = line.split_whitespace().collect::<Vec<_>>().join(" ");
        match words.as_str() {
            "new course" => Command::NewCourse,
            "course info" => Command::CourseInfo,
            "categories" => Command::Categories,
            "category info" => Command::CategoryInfo,
            "assignments" => Command::Assignments,
            "assignment info" => Command::AssignmentInfo,
            "add category" => Command::AddCategory,
            "add assignment" => Command::AddAssignment,
            "update course" => Command::UpdateCourse,
            "update category" => Command::UpdateCategory,
            "update assignment" => Command::UpdateAssignment,
            "remove category" => Command::RemoveCategory,
            "remove assignment" => Command::RemoveAssignment,
            "grade" => Command::Grade,
            "help" => Command::Help,
            _ => Command::Unknown(line.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blank() {
        assert_eq!(Command::parse(""), Command::Blank);
        assert_eq!(Command::parse("   \t "), Command::Blank);
    }

    #[test]
    fn test_parse_open_and_save() {
        assert_eq!(
            Command::parse("open grades.json"),
            Command::Open(Some("grades.json".to_string()))
        );
        assert_eq!(
            Command::parse("save  my grades.json "),
            Command::Save(Some("my grades.json".to_string()))
        );
        assert_eq!(Command::parse("open"), Command::Open(None));
        assert_eq!(Command::parse("save   "), Command::Save(None));
    }

    #[test]
    fn test_parse_multiword_commands() {
        assert_eq!(Command::parse("new course"), Command::NewCourse);
        assert_eq!(Command::parse("  add   category "), Command::AddCategory);
        assert_eq!(Command::parse("remove assignment"), Command::RemoveAssignment);
        assert_eq!(Command::parse("update course"), Command::UpdateCourse);
        assert_eq!(Command::parse("grade"), Command::Grade);
        assert_eq!(Command::parse("help"), Command::Help);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            Command::parse("delete everything"),
            Command::Unknown("delete everything".to_string())
        );
        assert_eq!(Command::parse("Grade"), Command::Unknown("Grade".to_string()));
    }

    #[test]
    fn test_help_lists_every_command() {
        for name in [
            "open <file>",
            "save <file>",
            "new course",
            "course info",
            "categories",
            "category info",
            "assignments",
            "assignment info",
            "add category",
            "add assignment",
            "update course",
            "update category",
            "update assignment",
            "remove category",
            "remove assignment",
            "grade",
            "help",
        ] {
            assert!(HELP.contains(&format!("\t{}\n", name)), "missing {}", name);
        }
    }
}

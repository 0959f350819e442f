use crate::cli::output::current_preferences;

const WIDTH: usize = 50;
const TITLE: &str = "SIMPLE BUDGET TRACKER";

/// Numbered entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense,
    AddIncome,
    ViewBudget,
    Exit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 4] = [
        MenuChoice::AddExpense,
        MenuChoice::AddIncome,
        MenuChoice::ViewBudget,
        MenuChoice::Exit,
    ];

    pub fn number(self) -> usize {
        match self {
            MenuChoice::AddExpense => 1,
            MenuChoice::AddIncome => 2,
            MenuChoice::ViewBudget => 3,
            MenuChoice::Exit => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::AddExpense => "Add Expense",
            MenuChoice::AddIncome => "Add Income",
            MenuChoice::ViewBudget => "View Budget and Statement",
            MenuChoice::Exit => "Exit",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        let number: usize = input.trim().parse().ok()?;
        Self::ALL.into_iter().find(|choice| choice.number() == number)
    }
}

pub struct Banner;

impl Banner {
    pub fn text() -> String {
        let border = if current_preferences().plain_mode {
            '_'
        } else {
            '━'
        };
        let rule = border.to_string().repeat(WIDTH);
        let inner = WIDTH - 4;

        let mut lines = vec![
            rule.clone(),
            format!("{border} {:^inner$} {border}", TITLE),
            rule.clone(),
        ];
        for choice in MenuChoice::ALL {
            let entry = format!("{}. {}", choice.number(), choice.label());
            lines.push(format!("{border} {:<inner$} {border}", entry));
        }
        lines.push(rule);
        lines.join("\n")
    }
}

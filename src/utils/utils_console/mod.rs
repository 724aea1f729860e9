use colored::Colorize;

/// Prints the given string with the given color.
///
/// ## Example
/// ```
/// use optima_gripper::utils::utils_console::{optima_print, PrintMode, PrintColor};
/// optima_print("test", PrintMode::Print, PrintColor::Blue, false);
/// ```
pub fn optima_print(s: &str, mode: PrintMode, color: PrintColor, bolded: bool) {
    let mut string = match &color {
        PrintColor::None => { s.normal() }
        _ => {
            let c = color.get_color_triple();
            s.truecolor(c.0, c.1, c.2)
        }
    };
    if bolded { string = string.bold(); }
    match mode {
        PrintMode::Println => { println!("{}", string); }
        PrintMode::Print => { print!("{}", string); }
    }
}

pub fn optima_print_new_line() {
    optima_print("\n", PrintMode::Print, PrintColor::None, false);
}

/// Prints a yellow, bolded warning line.
pub fn optima_print_warning(s: &str) {
    optima_print(&format!("WARNING: {}", s), PrintMode::Println, PrintColor::Yellow, true);
}

/// Enum that is used in optima_print function.
/// Println will cause a new line after each line, while Print will not.
#[derive(Clone, Debug)]
pub enum PrintMode {
    Println,
    Print
}

/// Defines color for an optima print command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PrintColor {
    None,
    Blue,
    Green,
    Red,
    Yellow,
    Cyan,
    Magenta
}
impl PrintColor {
    pub fn get_color_triple(&self) -> (u8, u8, u8) {
        match self {
            PrintColor::None => { (0,0,0) }
            PrintColor::Blue => { return (0, 0, 255) }
            PrintColor::Green => { return (0, 255, 0) }
            PrintColor::Red => { return (255, 0, 0) }
            PrintColor::Yellow => { return (255, 255, 0) }
            PrintColor::Cyan => { return (0, 255, 255) }
            PrintColor::Magenta => { return (255, 0, 255) }
        }
    }
}

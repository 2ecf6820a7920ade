//! Terminal clearing and the startup banner.

use std::io::IsTerminal;

const BANNER: &str = r"
 _  __ ___  _   _  _____  __  __     _
| |/ /|_ _|| \ | || ____||  \/  |   / \
| ' /  | | |  \| ||  _|  | |\/| |  / _ \
| . \  | | | |\  || |___ | |  | | / ___ \
|_|\_\|___||_| \_||_____||_|  |_|/_/   \_\

        kinematics problem solver
";

/// Clear the terminal with ANSI escapes. No-op when stdout is not a terminal.
pub fn clear() {
    if std::io::stdout().is_terminal() {
        print!("\x1b[2J\x1b[H");
    }
}

/// Print the startup banner.
pub fn banner() {
    println!("{BANNER}");
}

use crate::game_state::MAX_WRONG_GUESSES;

pub const LOGO: &str = r"
  _    _
 | |  | |
 | |__| | __ _ _ __   __ _ _ __ ___   __ _ _ __
 |  __  |/ _` | '_ \ / _` | '_ ` _ \ / _` | '_ \
 | |  | | (_| | | | | (_| | | | | | | (_| | | | |
 |_|  |_|\__,_|_| |_|\__, |_| |_| |_|\__,_|_| |_|
                      __/ |
                     |___/
";

const GALLOWS: [&str; MAX_WRONG_GUESSES + 1] = [
    "x-------x\n\n\n\n\n",
    "x-------x\n|\n|\n|\n|\n|",
    "x-------x\n|       |\n|       0\n|\n|\n|",
    "x-------x\n|       |\n|       0\n|       |\n|\n|",
    "x-------x\n|       |\n|       0\n|      /|\\\n|\n|",
    "x-------x\n|       |\n|       0\n|      /|\\\n|      /\n|",
    "x-------x\n|       |\n|       0\n|      /|\\\n|      / \\\n|",
];

/// Gallows drawing for a wrong-guess count; counts past the last stage show the last stage.
pub fn gallows(wrong_guesses: usize) -> &'static str {
    GALLOWS[wrong_guesses.min(MAX_WRONG_GUESSES)]
}

/// The revealed word inside a double-line box.
pub fn word_box(revealed: &str) -> String {
    let width = revealed.chars().count() + 6;
    let bar = "═".repeat(width);
    format!("╔{bar}╗\n║   {revealed}   ║\n╚{bar}╝")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_per_wrong_guess() {
        assert!(!gallows(0).contains('0'));
        assert!(gallows(2).contains('0'));
        assert!(gallows(6).contains("/ \\"));
        assert_eq!(gallows(9), gallows(6));
    }

    #[test]
    fn test_word_box_lines_align() {
        let boxed = word_box("c _ t");
        let widths: Vec<usize> = boxed.lines().map(|l| l.chars().count()).collect();
        assert_eq!(widths.len(), 3);
        assert!(widths.iter().all(|&w| w == widths[0]));
    }
}

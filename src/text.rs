pub const MSG_BANNER: &str = "pwlab - random password generator with a brute-force strength estimate
threat model: 100 guesses/day for 10 days, required crack probability 1e-7
passwords come from a non-cryptographic generator; use them for study only";

pub const MSG_VERDICT_MET:     &str = "+ strength requirements MET";
pub const MSG_VERDICT_NOT_MET: &str = "x strength requirements NOT MET";

pub const MSG_NOTHING_YET:  &str = "nothing generated yet, run `generate`";
pub const MSG_COPIED:       &str = "copied to clipboard";
pub const MSG_BYE:          &str = "bye";

pub const MSG_HELP: &str = "COMMANDS:
    1..5       - toggle a character category
    length <n> - set password length (4-20)
    count <n>  - set how many passwords to generate (1-100)
    generate   - generate passwords and the strength report (g)
    copy <n>   - copy password number n to the clipboard (c)
    alphabet   - print the current alphabet (a)
    show       - print current settings and results (s)
    help       - print this message (h)
    quit       - leave (q)
";

use clap::Parser;

use street_art::street::UnknownTokens;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Street tokens such as `b_4,3,#`, `p_5,*` or `e_3,x_y`; read from stdin when absent
    pub tokens: Vec<String>,

    /// What to do with tokens of an unknown kind, overriding the config file
    #[arg(short, long, value_name = "POLICY")]
    pub unknown_tokens: Option<UnknownTokens>,
}

impl Cli {
    /// The street line given on the command line, if any.
    pub fn street_line(&self) -> Option<String> {
        if self.tokens.is_empty() {
            None
        } else {
            Some(self.tokens.join(" "))
        }
    }
}

use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    roster completions bash > ~/.bash_completion.d/roster\n\n\
                  Generate zsh completions:\n    roster completions zsh > ~/.zfunc/_roster\n\n\
                  Generate fish completions:\n    roster completions fish > ~/.config/fish/completions/roster.fish\n\n\
                  Generate PowerShell completions:\n    roster completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}

use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    packline completions bash > ~/.bash_completion.d/packline\n\n\
                  Generate zsh completions:\n    packline completions zsh > ~/.zfunc/_packline\n\n\
                  Generate fish completions:\n    packline completions fish > ~/.config/fish/completions/packline.fish\n\n\
                  Generate PowerShell completions:\n    packline completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}

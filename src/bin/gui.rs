use fractal_sonifier::{GuiError, PixelsPresenterFactory, RodioAudioOutput, RunGuiCommand, SessionConfig};
use log::error;
use std::process::ExitCode;

fn run() -> Result<(), GuiError> {
    let audio = RodioAudioOutput::new()?;
    let command = RunGuiCommand::new(PixelsPresenterFactory::new(), SessionConfig::default());

    command.execute(audio)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("fractal_sonifier: {}", e);
            ExitCode::FAILURE
        }
    }
}

// sortty: Terminal Sorting Algorithm Visualizer

use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use sortty::ui::app::DEFAULT_LIST_LEN;
use sortty::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();

    let list_len = match args.get(1) {
        None => DEFAULT_LIST_LEN,
        Some(raw) => match raw.parse::<usize>() {
            Ok(n) if (2..=512).contains(&n) => n,
            _ => {
                let program_name = args.first().map(|s| s.as_str()).unwrap_or("sortty");
                eprintln!("Error: Invalid list size '{}'", raw);
                eprintln!();
                eprintln!("Usage: {} [list-size]", program_name);
                eprintln!();
                eprintln!("  list-size    Number of bars to sort (2..=512, default {})", DEFAULT_LIST_LEN);
                std::process::exit(1);
            }
        },
    };

    let mut app = match App::new(list_len) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    eprintln!("Visualizing {} values. Click the buttons or use s/a/d, q to quit.", list_len);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

use anyhow::Result;
use huoguoml::dashboard::{CardLayout, Navigator};

struct Args {
    uri: String,
}

impl Args {
    pub fn from_env() -> Result<Self> {
        let mut args = pico_args::Arguments::from_env();
        Ok(Args {
            uri: args
                .opt_value_from_str(["-u", "--uri"])?
                .unwrap_or_else(|| "experiments/mnist/1".to_string()),
        })
    }
}

struct PrintingNavigator;

impl Navigator for PrintingNavigator {
    fn push(&mut self, path: &str) {
        println!("history <- {}", path);
    }
}

fn main() -> Result<()> {
    let args = Args::from_env()?;
    let segments: Vec<String> = args.uri.split('/').map(str::to_string).collect();

    let cards = vec![
        "model graph".to_string(),
        "model api".to_string(),
        "requirements".to_string(),
    ];
    let mut layout = CardLayout::new(cards, segments);

    for entry in layout.breadcrumb() {
        match &entry.target {
            Some(target) => println!("{} -> {}", entry.label, target),
            None => println!("{}", entry.label),
        }
    }

    let grid = layout.grid();
    println!(
        "{} cards, {} per row on a wide viewport",
        grid.cells.len(),
        grid.columns.wide
    );

    let last = layout.breadcrumb().len().saturating_sub(1);
    let mut navigator = PrintingNavigator;
    layout.activate(last, &mut navigator);

    Ok(())
}

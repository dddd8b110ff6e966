use std::io;

use clap::{CommandFactory, Parser};

use crate::{
    catalog::ACTIVITIES,
    domain::{Activity, AgeGroup, Category, Gender, Preferences, Suggester},
    search::{SearchIndex, SearchQuery, search},
    storage,
};

#[derive(Parser, Debug)]
#[command(name = "antsy")]
#[command(about = "Boredom buster: suggests something to do", long_about = None)]
pub enum Cli {
    #[command(about = "Suggest a random activity")]
    Pick {
        #[arg(long, value_enum, help = "Age group (overrides saved preference)")]
        age: Option<AgeGroup>,

        #[arg(long, value_enum, help = "Gender (overrides saved preference)")]
        gender: Option<Gender>,

        #[arg(long, help = "Ignore preferences and pick from the whole catalog")]
        lucky: bool,
    },

    #[command(about = "Fuzzy-search the activity catalog")]
    Search {
        #[arg(help = "Search text")]
        query: Option<String>,

        #[arg(long, short, value_enum, help = "Restrict to one category")]
        category: Option<Category>,
    },

    #[command(about = "List activity categories")]
    Categories,

    #[command(about = "Show or update saved preferences")]
    Prefs {
        #[arg(long, value_enum, help = "Set the age group")]
        age: Option<AgeGroup>,

        #[arg(long, value_enum, help = "Set the gender")]
        gender: Option<Gender>,

        #[arg(long, help = "Clear saved preferences", conflicts_with_all = ["age", "gender"])]
        clear: bool,
    },

    #[command(about = "Generate shell completions")]
    Completions {
        #[arg(help = "Shell type (bash, zsh, fish)")]
        shell: String,
    },
}

fn print_activity(activity: &Activity) {
    println!("{}", activity.text);
    if let Some(description) = activity.description {
        println!("  {}", description);
    }
    let labels: Vec<&str> = activity.categories.iter().map(|c| c.label()).collect();
    println!("  [{}]", labels.join(", "));
}

pub fn pick(age: Option<AgeGroup>, gender: Option<Gender>, lucky: bool) -> Result<(), String> {
    let saved = storage::load_preferences(&storage::get_preferences_path());
    let prefs = Preferences {
        age_group: age.or(saved.age_group),
        gender: gender.or(saved.gender),
    };

    if !lucky && !prefs.is_complete() {
        return Err(
            "Set both --age and --gender (or save them with 'antsy prefs'), or use --lucky"
                .to_string(),
        );
    }

    let last_pick_path = storage::get_last_pick_path();
    let mut suggester = Suggester::new();
    if let Some(last) = storage::load_last_pick(&last_pick_path) {
        suggester.set_previous(&last.activity_id);
    }

    let mut rng = rand::thread_rng();
    let activity = suggester.suggest(&mut rng, ACTIVITIES, &prefs, lucky);
    print_activity(activity);

    // Ignore write failures; the pick was already shown and the only cost
    // is a possible repeat next time.
    let _ = storage::save_last_pick(
        &last_pick_path,
        &storage::LastPick {
            activity_id: activity.id.to_string(),
        },
    );

    Ok(())
}

pub fn run_search(text: Option<String>, category: Option<Category>) -> Result<(), String> {
    let query = SearchQuery {
        text: text.unwrap_or_default(),
        category,
    };

    if query.text.trim().is_empty() && query.category.is_none() {
        return Err("Give search text, a --category, or both".to_string());
    }

    let index = SearchIndex::build(ACTIVITIES);
    let results = search(ACTIVITIES, &index, &query);

    if results.is_empty() {
        println!("No matches.");
        return Ok(());
    }

    for activity in results {
        print_activity(activity);
    }
    Ok(())
}

pub fn list_categories() {
    for category in Category::ALL {
        println!("{:14} {}", category.name(), category.label());
    }
}

pub fn prefs(age: Option<AgeGroup>, gender: Option<Gender>, clear: bool) -> Result<(), String> {
    let path = storage::get_preferences_path();

    if clear {
        storage::delete_file_if_exists(&path).map_err(|e| e.to_string())?;
        println!("Preferences cleared");
        return Ok(());
    }

    let mut preferences = storage::load_preferences(&path);
    if age.is_some() || gender.is_some() {
        if let Some(age) = age {
            preferences.age_group = Some(age);
        }
        if let Some(gender) = gender {
            preferences.gender = Some(gender);
        }
        storage::save_preferences(&path, &preferences).map_err(|e| e.to_string())?;
    }

    let age_label = preferences.age_group.map_or("unset", |a| a.label());
    let gender_label = preferences.gender.map_or("unset", |g| g.label());
    println!("age group: {}", age_label);
    println!("gender:    {}", gender_label);
    Ok(())
}

pub fn print_completions(shell: &str) -> Result<(), String> {
    use clap_complete::Shell;
    match shell {
        "bash" => {
            clap_complete::generate(Shell::Bash, &mut Cli::command(), "antsy", &mut io::stdout());
        }
        "zsh" => {
            clap_complete::generate(Shell::Zsh, &mut Cli::command(), "antsy", &mut io::stdout());
        }
        "fish" => {
            clap_complete::generate(Shell::Fish, &mut Cli::command(), "antsy", &mut io::stdout());
        }
        _ => {
            return Err(format!(
                "Unsupported shell: {}. Use bash, zsh, or fish.",
                shell
            ));
        }
    }
    Ok(())
}

pub fn run_cli() {
    let cli = Cli::parse();
    match cli {
        Cli::Pick { age, gender, lucky } => {
            if let Err(e) = pick(age, gender, lucky) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Cli::Search { query, category } => {
            if let Err(e) = run_search(query, category) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Cli::Categories => list_categories(),
        Cli::Prefs { age, gender, clear } => {
            if let Err(e) = prefs(age, gender, clear) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Cli::Completions { shell } => {
            if let Err(e) = print_completions(&shell) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

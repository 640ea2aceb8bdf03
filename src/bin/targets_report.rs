//! Utility to print daily targets and progress from JSON files
//!
//! Usage: targets_report PROFILE.json [FOOD.json EXERCISE.json [DATE]]
//!
//! PROFILE.json holds a user profile record; FOOD.json and EXERCISE.json
//! hold arrays of logged entries. DATE defaults to today (local time).

use std::path::Path;

use chrono::Local;
use tracing_subscriber::EnvFilter;

use fitcore::models::{ExerciseEntry, FoodEntry, UserProfile};
use fitcore::summary::{progress_percent, remaining, summarize_date};
use fitcore::targets::resolve_daily_targets;

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, Box<dyn std::error::Error>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("fitcore=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} PROFILE.json [FOOD.json EXERCISE.json [DATE]]", args[0]);
        std::process::exit(2);
    }

    let profile: UserProfile = load_json(Path::new(&args[1]))?;
    let today = Local::now().date_naive();

    let targets = match resolve_daily_targets(&profile, today) {
        Ok(targets) => targets,
        Err(e) => {
            eprintln!("Profile incomplete, cannot calculate daily targets: {}", e);
            std::process::exit(1);
        }
    };

    println!("Daily targets:");
    println!("  Calories: {:.0} kcal", targets.calories);
    println!("  Protein:  {:.0} g", targets.protein_grams);
    println!("  Carbs:    {:.0} g", targets.carb_grams);
    println!("  Fat:      {:.0} g", targets.fat_grams);

    // Show the derivation trace when the profile supports it
    if let Ok(bio) = profile.biometrics(today) {
        let breakdown = fitcore::targets::derive_targets(&bio);
        println!("Derivation:");
        println!("  Age:  {} years", breakdown.age);
        println!("  BMR:  {:.1} kcal", breakdown.bmr);
        println!("  TDEE: {:.1} kcal", breakdown.tdee);
        if breakdown.calorie_target.deficit_or_surplus != 0.0 {
            println!(
                "  Goal adjustment: {:+.0} kcal",
                breakdown.calorie_target.deficit_or_surplus
            );
        }
    }

    if args.len() >= 4 {
        let food_entries: Vec<FoodEntry> = load_json(Path::new(&args[2]))?;
        let exercise_entries: Vec<ExerciseEntry> = load_json(Path::new(&args[3]))?;
        let date = args
            .get(4)
            .cloned()
            .unwrap_or_else(|| today.format("%Y-%m-%d").to_string());

        let summary = summarize_date(&date, &food_entries, &exercise_entries);
        println!("Summary for {}:", date);
        println!("  Consumed: {:.0} kcal", summary.consumed.calories);
        println!("  Burned:   {:.0} kcal", summary.exercise_calories_burned);
        println!("  Net:      {:.0} kcal", summary.net_calories);
        println!(
            "  Remaining: {:.0} kcal",
            remaining(targets.calories, summary.net_calories)
        );
        println!(
            "  Calorie progress: {:.0}%",
            progress_percent(summary.net_calories, targets.calories)
        );
        println!(
            "  Protein: {:.1} g / {:.0} g ({:.0}%)",
            summary.consumed.protein,
            targets.protein_grams,
            progress_percent(summary.consumed.protein, targets.protein_grams)
        );
        println!(
            "  Carbs:   {:.1} g / {:.0} g ({:.0}%)",
            summary.consumed.carbs,
            targets.carb_grams,
            progress_percent(summary.consumed.carbs, targets.carb_grams)
        );
        println!(
            "  Fat:     {:.1} g / {:.0} g ({:.0}%)",
            summary.consumed.fat,
            targets.fat_grams,
            progress_percent(summary.consumed.fat, targets.fat_grams)
        );
    }

    Ok(())
}

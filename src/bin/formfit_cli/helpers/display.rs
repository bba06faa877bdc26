// ABOUTME: Output formatting helpers for the formfit CLI
// ABOUTME: Consistent terminal rendering of targets, plans, meals, and progress
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use formfit::services::PlannedExercise;
use formfit_core::models::{DailyDietPlan, ExercisePerformanceLog, WorkoutPlan};
use formfit_intelligence::ProgressSeries;

const RULE_WIDTH: usize = 60;

/// Print a section heading with an underline
pub fn heading(title: &str) {
    println!("\n{title}");
    println!("{}", "=".repeat(RULE_WIDTH));
}

/// Format a load without trailing zeros (62.5 stays, 60.0 prints as 60)
pub fn kg(weight: f64) -> String {
    format!("{weight}")
}

/// Print one exercise with its target and reason
pub fn display_planned_exercise(planned: &PlannedExercise) {
    let target = &planned.target;
    println!(
        "  {:<28} {:>6} kg x {:<3} [{}]",
        planned.exercise.name,
        kg(target.weight),
        target.reps,
        target.reason
    );
    println!("      {}", target.reason.description());
    if let Some(last) = &planned.last_log {
        println!(
            "      Last: {} kg x {} @ RPE {} on {}",
            kg(last.weight_used),
            last.reps_performed,
            last.rpe,
            last.date.format("%Y-%m-%d")
        );
    }
}

/// Print a plan header line
pub fn display_plan(plan: &WorkoutPlan) {
    let day = plan
        .day
        .map_or_else(|| "Flexible".to_owned(), |day| day.to_string());
    println!(
        "  {:<16} {:<24} {:<10} {}",
        plan.id,
        plan.name,
        day,
        plan.exercise_ids.join(", ")
    );
}

/// Print a history table, newest first
pub fn display_history(history: &[ExercisePerformanceLog]) {
    if history.is_empty() {
        println!("  No sessions logged yet.");
        return;
    }
    println!("  {:<18} {:>8} {:>5} {:>5}", "Date", "Weight", "Reps", "RPE");
    for log in history {
        println!(
            "  {:<18} {:>8} {:>5} {:>5}",
            log.date.format("%Y-%m-%d %H:%M"),
            kg(log.weight_used),
            log.reps_performed,
            log.rpe
        );
    }
}

/// Print the load series and the gain summary
pub fn display_progress(series: &ProgressSeries) {
    for point in series.points() {
        println!(
            "  {}  {:>7} kg x {}",
            point.date.format("%m/%d"),
            kg(point.weight),
            point.reps
        );
    }
    match series.summary() {
        Some(summary) => {
            println!();
            println!("  Starting weight: {} kg", kg(summary.starting_weight));
            println!("  Current weight:  {} kg", kg(summary.current_weight));
            println!("  Total gain:      {:+} kg", summary.total_gain);
        }
        None => println!("  Not enough data yet. Log at least two sessions."),
    }
}

/// Print a daily diet plan with recipes
pub fn display_diet_plan(plan: &DailyDietPlan) {
    println!("{}", plan.summary);
    for meal in &plan.meals {
        println!();
        println!(
            "  {}: {} ({} kcal, {} g protein)",
            meal.meal_type, meal.meal_name, meal.calories, meal.protein
        );
        println!("    {}", meal.description);
        println!("    Ingredients:");
        for ingredient in &meal.ingredients {
            println!("      - {ingredient}");
        }
        println!("    Steps:");
        for (index, step) in meal.instructions.iter().enumerate() {
            println!("      {}. {step}", index + 1);
        }
    }
    println!();
    println!(
        "  Total: {} kcal, {} g protein",
        plan.total_calories(),
        plan.total_protein()
    );
}

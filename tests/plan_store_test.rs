// ABOUTME: Integration tests for workout plan and profile repositories
// ABOUTME: Covers default plans, upsert, delete, today's plan, and profile validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::thread;

use anyhow::Result;
use common::memory_context;
use formfit::errors::ErrorCode;
use formfit::models::{Allergy, DietType, TrainingDay, UserProfile, WorkoutPlan};

fn plan_ids(plans: &[WorkoutPlan]) -> Vec<&str> {
    plans.iter().map(|plan| plan.id.as_str()).collect()
}

#[test]
fn test_defaults_until_first_save() -> Result<()> {
    let ctx = memory_context(None);
    let plans = ctx.plans().plans()?;
    assert_eq!(plan_ids(&plans), vec!["ppl_push", "ppl_pull", "ppl_legs"]);
    assert_eq!(plans[0].day, Some(TrainingDay::Monday));
    Ok(())
}

#[test]
fn test_save_appends_to_defaults() -> Result<()> {
    let ctx = memory_context(None);
    let arms = WorkoutPlan::new("upper", "Upper Day", None, vec!["bench_press".to_owned()]);
    ctx.plans().save_plan(&arms)?;

    let plans = ctx.plans().plans()?;
    assert_eq!(
        plan_ids(&plans),
        vec!["ppl_push", "ppl_pull", "ppl_legs", "upper"]
    );
    assert_eq!(ctx.plans().plan("upper")?, Some(arms));
    Ok(())
}

#[test]
fn test_save_replaces_same_id_in_place() -> Result<()> {
    let ctx = memory_context(None);
    let renamed = WorkoutPlan::new(
        "ppl_pull",
        "Heavy Pull",
        Some(TrainingDay::Thursday),
        vec!["deadlift".to_owned()],
    );
    ctx.plans().save_plan(&renamed)?;

    let plans = ctx.plans().plans()?;
    assert_eq!(plans.len(), 3);
    assert_eq!(plans[1], renamed);
    Ok(())
}

#[test]
fn test_save_rejects_invalid_plans() {
    let ctx = memory_context(None);

    let blank = WorkoutPlan::new("  ", "Nameless", None, Vec::new());
    let err = ctx.plans().save_plan(&blank).unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);

    let unknown = WorkoutPlan::new("arms", "Arms", None, vec!["curl".to_owned()]);
    let err = ctx.plans().save_plan(&unknown).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.message.contains("curl"));
}

#[test]
fn test_deleting_every_plan_stays_empty() -> Result<()> {
    let ctx = memory_context(None);
    for id in ["ppl_push", "ppl_pull", "ppl_legs"] {
        assert!(ctx.plans().delete_plan(id)?);
    }
    assert!(ctx.plans().plans()?.is_empty());
    assert!(ctx.plans().todays_plan(TrainingDay::Monday)?.is_none());
    Ok(())
}

#[test]
fn test_concurrent_saves_and_deletes_are_all_applied() -> Result<()> {
    let ctx = memory_context(None);
    let plans = ctx.plans().clone();

    thread::scope(|scope| {
        for n in 0..12 {
            let plans = plans.clone();
            scope.spawn(move || {
                let plan = WorkoutPlan::new(
                    format!("custom_{n}"),
                    format!("Custom {n}"),
                    None,
                    vec!["squat".to_owned(), "rdl".to_owned()],
                );
                plans.save_plan(&plan).unwrap();
            });
        }
        let plans = plans.clone();
        scope.spawn(move || assert!(plans.delete_plan("ppl_legs").unwrap()));
    });

    let stored = ctx.plans().plans()?;
    let ids = plan_ids(&stored);
    assert_eq!(ids.len(), 14);
    assert!(!ids.contains(&"ppl_legs"));
    assert!((0..12).all(|n| ids.contains(&format!("custom_{n}").as_str())));
    Ok(())
}

#[test]
fn test_delete_missing_plan_is_noop() -> Result<()> {
    let ctx = memory_context(None);
    assert!(!ctx.plans().delete_plan("nope")?);
    assert_eq!(ctx.plans().plans()?.len(), 3);
    Ok(())
}

#[test]
fn test_todays_plan_falls_back_to_first() -> Result<()> {
    let ctx = memory_context(None);
    let friday = ctx.plans().todays_plan(TrainingDay::Friday)?.unwrap();
    assert_eq!(friday.id, "ppl_legs");

    let tuesday = ctx.plans().todays_plan(TrainingDay::Tuesday)?.unwrap();
    assert_eq!(tuesday.id, "ppl_push");
    Ok(())
}

#[test]
fn test_profile_roundtrip_and_validation() -> Result<()> {
    let ctx = memory_context(None);
    assert!(ctx.profiles().profile()?.is_none());

    let profile = UserProfile {
        name: "Alex".to_owned(),
        weight_kg: 82.0,
        experience_years: 2.5,
        diet: DietType::NonVegetarian,
        allergy: Allergy::Peanuts,
        onboarding_complete: true,
        ..UserProfile::default()
    };
    ctx.profiles().save_profile(&profile)?;
    assert_eq!(ctx.profiles().profile()?, Some(profile.clone()));

    let invalid = UserProfile {
        weight_kg: 0.0,
        ..profile
    };
    let err = ctx.profiles().save_profile(&invalid).unwrap_err();
    assert_eq!(err.code, ErrorCode::ValueOutOfRange);

    let nameless = UserProfile::default();
    let err = ctx.profiles().save_profile(&nameless).unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
    Ok(())
}

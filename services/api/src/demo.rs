use crate::infra::{completion_engine, InMemoryProfileRepository, LoggingEngagementNotifier};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use nutricoach::config::CompletionOptions;
use nutricoach::error::AppError;
use nutricoach::profiles::{
    onboarding_steps, CoachingPreferences, CompletionEngine, CompletionReport, ContactChannel,
    ContactDetails, IdentityDetails, MedicalBackground, PatientProfile, PatientRosterImporter,
    ProfileData, ProfileService, Role, Tier,
};

#[derive(Args, Debug)]
pub(crate) struct CompletionReportArgs {
    /// Profile JSON export to score (the API's profile payload shape)
    #[arg(long, conflicts_with = "roster")]
    pub(crate) profile: Option<PathBuf>,
    /// Patient roster CSV to score row by row
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
    /// Cap the number of recommendations shown per profile
    #[arg(long, default_value_t = 5)]
    pub(crate) max_recommendations: usize,
    /// Include the onboarding step listing in the output
    #[arg(long)]
    pub(crate) list_steps: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional roster CSV to include in the demo output
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
    /// Skip the intake-and-milestone portion of the demo
    #[arg(long)]
    pub(crate) skip_intake: bool,
}

pub(crate) fn run_completion_report(args: CompletionReportArgs) -> Result<(), AppError> {
    let CompletionReportArgs {
        profile,
        roster,
        max_recommendations,
        list_steps,
    } = args;

    let engine = completion_engine(&CompletionOptions {
        max_recommendations,
    });
    println!(
        "Evaluating {} registered fields (up to {} recommended actions)",
        engine.registry().len(),
        engine.config().max_recommendations
    );

    if let Some(path) = roster {
        let patients = PatientRosterImporter::from_path(path)?;
        println!("Scored {} roster rows", patients.len());
        for (index, patient) in patients.into_iter().enumerate() {
            let profile = ProfileData::Patient(patient);
            let report = engine.report(&profile);
            let name = display_name(&profile);
            println!(
                "- row {}: {} | {}% ({})",
                index + 1,
                name,
                report.percentage,
                report.level.label()
            );
            for action in &report.recommendations {
                println!("    next: {action}");
            }
        }
        return Ok(());
    }

    let path = profile.ok_or_else(|| {
        AppError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "pass --profile <file.json> or --roster <file.csv>",
        ))
    })?;
    let raw = std::fs::read_to_string(path)?;
    let profile: ProfileData = serde_json::from_str(&raw)?;

    let report = engine.report(&profile);
    render_completion_report(&engine, &report, list_steps);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        roster,
        skip_intake,
    } = args;

    println!("Profile completion demo");
    let engine = completion_engine(&CompletionOptions {
        max_recommendations: 5,
    });

    let blank = engine.report(&ProfileData::empty(Role::Patient));
    println!(
        "\nBrand-new patient account (nothing saved yet): {}% complete",
        blank.percentage
    );

    let draft = demo_draft_patient();
    println!("\nDraft patient profile (fresh signup)");
    let report = engine.report(&draft);
    render_completion_report(&engine, &report, true);

    if let Some(path) = roster {
        let patients = PatientRosterImporter::from_path(path)?;
        println!("\nRoster import: {} patients", patients.len());
        for patient in &patients {
            let report = engine.report(&ProfileData::Patient(patient.clone()));
            println!(
                "- {} | {}% ({})",
                display_name(&ProfileData::Patient(patient.clone())),
                report.percentage,
                report.level.label()
            );
        }
    }

    if skip_intake {
        return Ok(());
    }

    println!("\nIntake and milestone demo");
    let repository = Arc::new(InMemoryProfileRepository::default());
    let notifier = Arc::new(LoggingEngagementNotifier::default());
    let service = ProfileService::new(repository, notifier.clone(), engine);

    let record = match service.submit(demo_draft_patient()) {
        Ok(record) => record,
        Err(err) => {
            println!("  Submission rejected: {}", err);
            return Ok(());
        }
    };
    let summary = record.summary_view();
    println!(
        "- Registered profile {} -> {}% complete",
        summary.profile_id.0,
        summary.percentage.unwrap_or(0)
    );

    let report = match service.update(&record.profile_id, demo_complete_patient()) {
        Ok(report) => report,
        Err(err) => {
            println!("  Update rejected: {}", err);
            return Ok(());
        }
    };
    println!(
        "- After finishing the forms: {}% ({})",
        report.percentage,
        report.level.label()
    );

    match service.get(&record.profile_id) {
        Ok(stored) => match serde_json::to_string_pretty(&stored.summary_view()) {
            Ok(json) => println!("  Summary card payload:\n{}", json),
            Err(err) => println!("  Summary card payload unavailable: {}", err),
        },
        Err(err) => println!("  Repository lookup failed: {}", err),
    }

    let events = notifier.events();
    if events.is_empty() {
        println!("  Engagement alerts: none dispatched");
    } else {
        println!("  Engagement alerts:");
        for alert in events {
            println!("    - template={} -> {}", alert.template, alert.profile_id.0);
        }
    }

    Ok(())
}

pub(crate) fn render_completion_report(
    engine: &CompletionEngine,
    report: &CompletionReport,
    list_steps: bool,
) {
    println!(
        "Completion: {}% ({}) for a {}",
        report.percentage,
        report.level.label(),
        report.role.label()
    );

    let progress = engine.progress(report);
    if progress.remaining > 0 {
        println!(
            "Next band at {}%: {} points away ({}% of the way there)",
            progress.target, progress.remaining, progress.percent_of_target
        );
    } else {
        println!("Top completion band reached");
    }

    println!("\nCategory breakdown");
    for (category, percentage) in &report.category_breakdown {
        println!("- {}: {}%", category.label(), percentage);
    }

    if report.missing_fields.is_empty() {
        println!("\nMissing fields: none");
    } else {
        println!("\nMissing fields");
        for entry in &report.missing_fields.critical {
            println!("- [{}] {}", Tier::Critical.label(), entry.name.label());
        }
        for entry in &report.missing_fields.important {
            println!("- [{}] {}", Tier::Important.label(), entry.name.label());
        }
        for entry in &report.missing_fields.optional {
            println!("- [{}] {}", Tier::Optional.label(), entry.name.label());
        }
    }

    if !report.recommendations.is_empty() {
        println!("\nRecommended actions");
        for action in &report.recommendations {
            println!("- {}", action);
        }
    }

    if list_steps {
        let steps = onboarding_steps(report);
        if !steps.is_empty() {
            println!("\nOnboarding steps");
            for step in steps {
                println!("- {} ({}): {}", step.field.label(), step.form_section, step.prompt);
            }
        }
    }
}

fn display_name(profile: &ProfileData) -> String {
    let identity = match profile {
        ProfileData::Patient(patient) => &patient.identity,
        ProfileData::Nutritionist(nutritionist) => &nutritionist.identity,
    };
    match (&identity.first_name, &identity.last_name) {
        (Some(first), Some(last)) => format!("{first} {last}"),
        (Some(first), None) => first.clone(),
        (None, Some(last)) => last.clone(),
        (None, None) => "(unnamed)".to_string(),
    }
}

fn demo_draft_patient() -> ProfileData {
    ProfileData::Patient(PatientProfile {
        identity: IdentityDetails {
            first_name: Some("Sam".to_string()),
            last_name: Some("Okafor".to_string()),
            birth_date: None,
            gender: None,
        },
        ..PatientProfile::default()
    })
}

fn demo_complete_patient() -> ProfileData {
    ProfileData::Patient(PatientProfile {
        identity: IdentityDetails {
            first_name: Some("Sam".to_string()),
            last_name: Some("Okafor".to_string()),
            birth_date: NaiveDate::from_ymd_opt(1992, 8, 21),
            gender: Some("male".to_string()),
        },
        contact: ContactDetails {
            email: Some("sam.okafor@example.com".to_string()),
            phone: Some("515-555-0163".to_string()),
            address: Some("88 Walnut St".to_string()),
            city: Some("Des Moines".to_string()),
        },
        medical: MedicalBackground {
            height_cm: Some(179.0),
            weight_kg: Some(83.0),
            allergies: vec!["penicillin".to_string()],
            medical_conditions: vec!["high cholesterol".to_string()],
            dietary_restrictions: vec!["dairy free".to_string()],
            medications: vec!["atorvastatin".to_string()],
        },
        preferences: CoachingPreferences {
            activity_level: Some(nutricoach::profiles::ActivityLevel::Active),
            health_goals: vec!["lower cholesterol".to_string()],
            meal_preferences: vec!["high protein".to_string()],
            preferred_contact_channel: Some(ContactChannel::Email),
        },
    })
}

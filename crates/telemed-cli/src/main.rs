use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use telemed_client::config::{load_config, ClientConfig};
use telemed_client::{ApiClient, SessionStore};

mod commands;
mod render;

use commands::{appointments, auth, consultations, doctor, profile};

#[derive(Parser)]
#[command(name = "telemed", version, about = "Telemed CLI - telemedicine platform client")]
struct Cli {
    /// API base URL (overrides the config file)
    #[arg(long, env = "TELEMED_URL", global = true)]
    server: Option<String>,

    /// Session file path (overrides the config file)
    #[arg(long, env = "TELEMED_SESSION", global = true)]
    session_file: Option<PathBuf>,

    /// Optional YAML config file
    #[arg(long, env = "TELEMED_CONFIG", global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Register as a patient
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Register as a doctor
    RegisterDoctor {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        license_number: Option<String>,
        /// One of the values from `telemed specializations`
        #[arg(long)]
        specialization: Option<String>,
    },
    /// Request a password-reset email
    ForgotPassword {
        #[arg(long)]
        email: String,
    },
    /// Reset the password using the emailed code
    ResetPassword {
        #[arg(long)]
        code: Option<String>,
        #[arg(long)]
        new_password: String,
        #[arg(long)]
        confirm_password: String,
    },
    /// Change the password of the logged-in account
    UpdatePassword {
        #[arg(long)]
        old_password: String,
        #[arg(long)]
        new_password: String,
        #[arg(long)]
        confirm_password: String,
    },
    /// Upload a profile picture (JPEG, PNG or GIF)
    UploadPicture {
        file: PathBuf,
    },
    /// Clear the stored session
    Logout,
    /// List all doctors
    Doctors,
    /// List doctor specializations
    Specializations,
    /// Show my profile (patient)
    Profile,
    /// Update my patient profile
    UpdateProfile {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        /// Date of birth, YYYY-MM-DD
        #[arg(long)]
        date_of_birth: Option<String>,
        #[arg(long)]
        known_allergies: Option<String>,
        /// One of the values from the blood-group enumeration
        #[arg(long)]
        blood_group: Option<String>,
        /// One of the values from the genotype enumeration
        #[arg(long)]
        genotype: Option<String>,
    },
    /// Book an appointment with a doctor
    BookAppointment {
        /// Doctor id (see `telemed doctors`)
        #[arg(long)]
        doctor: Option<i64>,
        #[arg(long)]
        purpose: String,
        #[arg(long)]
        symptoms: String,
        /// Preferred date and time, e.g. 2026-09-01T10:30
        #[arg(long)]
        start: Option<String>,
    },
    /// List my appointments (patient)
    Appointments,
    /// Cancel a scheduled appointment
    CancelAppointment {
        appointment_id: i64,
    },
    /// Show my consultation history (patient)
    ConsultationHistory {
        /// Limit to the consultation of one appointment
        #[arg(long)]
        appointment: Option<i64>,
    },
    /// Doctor-side views
    Doctor {
        #[command(subcommand)]
        command: DoctorCommands,
    },
}

#[derive(Subcommand)]
enum DoctorCommands {
    /// Show my profile (doctor)
    Profile,
    /// Update my doctor profile
    UpdateProfile {
        #[arg(long)]
        first_name: Option<String>,
        #[arg(long)]
        last_name: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        /// One of the values from `telemed specializations`
        #[arg(long)]
        specialization: Option<String>,
    },
    /// List my appointments (doctor)
    Appointments,
    /// Mark an appointment as completed
    CompleteAppointment {
        appointment_id: i64,
    },
    /// Write the consultation note for a completed appointment
    CreateConsultation {
        #[arg(long)]
        appointment: i64,
        #[arg(long)]
        subjective: String,
        #[arg(long)]
        objective: String,
        #[arg(long)]
        assessment: String,
        #[arg(long)]
        plan: String,
    },
    /// Show the consultation history of one patient
    PatientHistory {
        #[arg(long)]
        patient: i64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => ClientConfig::default(),
    };
    let server = cli.server.unwrap_or(config.api_base_url);
    let session_file = cli.session_file.unwrap_or(config.session_file);

    let store = SessionStore::new(session_file);
    let client = ApiClient::new(&server, store.clone());

    match cli.command {
        Commands::Login { email, password } => {
            auth::cmd_login(&client, &store, email, password).await?;
        }
        Commands::Register {
            name,
            email,
            password,
        } => {
            auth::cmd_register(&client, name, email, password).await?;
        }
        Commands::RegisterDoctor {
            name,
            email,
            password,
            license_number,
            specialization,
        } => {
            auth::cmd_register_doctor(&client, name, email, password, license_number, specialization)
                .await?;
        }
        Commands::ForgotPassword { email } => {
            auth::cmd_forgot_password(&client, email).await?;
        }
        Commands::ResetPassword {
            code,
            new_password,
            confirm_password,
        } => {
            auth::cmd_reset_password(&client, code, new_password, confirm_password).await?;
        }
        Commands::UpdatePassword {
            old_password,
            new_password,
            confirm_password,
        } => {
            profile::cmd_update_password(&client, &store, old_password, new_password, confirm_password)
                .await?;
        }
        Commands::UploadPicture { file } => {
            profile::cmd_upload_picture(&client, &store, &file).await?;
        }
        Commands::Logout => {
            auth::cmd_logout(&store)?;
        }
        Commands::Doctors => {
            appointments::cmd_doctors(&client).await?;
        }
        Commands::Specializations => {
            doctor::cmd_specializations(&client).await?;
        }
        Commands::Profile => {
            profile::cmd_profile(&client, &store).await?;
        }
        Commands::UpdateProfile {
            first_name,
            last_name,
            phone,
            date_of_birth,
            known_allergies,
            blood_group,
            genotype,
        } => {
            profile::cmd_update_profile(
                &client,
                &store,
                profile::ProfileChanges {
                    first_name,
                    last_name,
                    phone,
                    date_of_birth,
                    known_allergies,
                    blood_group,
                    genotype,
                },
            )
            .await?;
        }
        Commands::BookAppointment {
            doctor,
            purpose,
            symptoms,
            start,
        } => {
            appointments::cmd_book_appointment(&client, &store, doctor, purpose, symptoms, start)
                .await?;
        }
        Commands::Appointments => {
            appointments::cmd_my_appointments(&client, &store).await?;
        }
        Commands::CancelAppointment { appointment_id } => {
            appointments::cmd_cancel_appointment(&client, &store, appointment_id).await?;
        }
        Commands::ConsultationHistory { appointment } => {
            consultations::cmd_consultation_history(&client, &store, appointment).await?;
        }
        Commands::Doctor { command } => match command {
            DoctorCommands::Profile => {
                doctor::cmd_doctor_profile(&client, &store).await?;
            }
            DoctorCommands::UpdateProfile {
                first_name,
                last_name,
                phone,
                specialization,
            } => {
                doctor::cmd_update_doctor_profile(
                    &client,
                    &store,
                    first_name,
                    last_name,
                    phone,
                    specialization,
                )
                .await?;
            }
            DoctorCommands::Appointments => {
                doctor::cmd_doctor_appointments(&client, &store).await?;
            }
            DoctorCommands::CompleteAppointment { appointment_id } => {
                doctor::cmd_complete_appointment(&client, &store, appointment_id).await?;
            }
            DoctorCommands::CreateConsultation {
                appointment,
                subjective,
                objective,
                assessment,
                plan,
            } => {
                doctor::cmd_create_consultation(
                    &client,
                    &store,
                    appointment,
                    subjective,
                    objective,
                    assessment,
                    plan,
                )
                .await?;
            }
            DoctorCommands::PatientHistory { patient } => {
                doctor::cmd_patient_history(&client, &store, patient).await?;
            }
        },
    }

    Ok(())
}

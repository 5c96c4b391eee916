//! Bulk-imports a CSV file of contacts into a Mailjet contact list.
//!
//! Chains three calls: upload the raw CSV data for the list, create the
//! import job referencing the uploaded data, then poll the job until it
//! settles.
//!
//! ```sh
//! MJ_APIKEY_PUBLIC=... MJ_APIKEY_PRIVATE=... \
//!     cargo run --example csv_import -- 45 contacts.csv
//! ```

use std::env;
use std::process;
use std::time::Duration;

use mailjet_api::{ApiKey, ApiSecretKey, MailjetClient, MailjetConfig, Params, Verb};

const POLL_INTERVAL: Duration = Duration::from_secs(2);
const MAX_POLLS: u32 = 15;

#[tokio::main]
async fn main() {
    let (list_id, csv_path) = parse_args();

    let csv_content = match std::fs::read_to_string(&csv_path) {
        Ok(content) => content,
        Err(err) => {
            eprintln!("error - couldn't read {csv_path}: {err}");
            process::exit(1);
        }
    };

    let client = client_from_env();

    let data_id = upload_csv(&client, &list_id, &csv_content).await;
    let job_id = create_import_job(&client, &list_id, data_id).await;
    monitor_job(&client, job_id).await;
}

fn parse_args() -> (String, String) {
    let mut args = env::args().skip(1);
    match (args.next(), args.next()) {
        (Some(list_id), Some(csv_path)) => (list_id, csv_path),
        _ => {
            eprintln!("usage: csv_import <contactslist-id> <csv-file>");
            process::exit(2);
        }
    }
}

fn client_from_env() -> MailjetClient {
    let api_key = env::var("MJ_APIKEY_PUBLIC")
        .ok()
        .and_then(|key| ApiKey::new(key).ok());
    let api_secret_key = env::var("MJ_APIKEY_PRIVATE")
        .ok()
        .and_then(|key| ApiSecretKey::new(key).ok());

    let (Some(api_key), Some(api_secret_key)) = (api_key, api_secret_key) else {
        eprintln!("error - set MJ_APIKEY_PUBLIC and MJ_APIKEY_PRIVATE");
        process::exit(2);
    };

    let config = match MailjetConfig::builder()
        .api_key(api_key)
        .api_secret_key(api_secret_key)
        .build()
    {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error - {err}");
            process::exit(2);
        }
    };

    MailjetClient::new(config)
}

/// Uploads the CSV bytes for the list and returns the stored data id.
async fn upload_csv(client: &MailjetClient, list_id: &str, csv_content: &str) -> u64 {
    let params = Params::new()
        .method(Verb::Post)
        .id(list_id)
        .field("csv_content", csv_content);

    let response = match client.call("uploadCSVContactslistData", params).await {
        Ok(response) => response,
        Err(err) => {
            eprintln!("error - CSV upload failed: {err}");
            process::exit(1);
        }
    };

    if !response.is_success() {
        eprintln!(
            "error - couldn't upload the data - code {}",
            response.status_code()
        );
        process::exit(1);
    }

    // The DATA endpoint answers with the id of the stored blob
    let Some(data_id) = response.json().and_then(|body| body["ID"].as_u64()) else {
        eprintln!("error - upload response carried no ID");
        process::exit(1);
    };

    println!("success - uploaded CSV data as {data_id}");
    data_id
}

/// Creates the import job for the uploaded data and returns the job id.
async fn create_import_job(client: &MailjetClient, list_id: &str, data_id: u64) -> u64 {
    let params = Params::new()
        .method(Verb::Post)
        .field("ContactsListID", list_id)
        .field("DataID", data_id)
        .field("Method", "addnoforce");

    let response = match client.call("csvimport", params).await {
        Ok(response) => response,
        Err(err) => {
            eprintln!("error - job creation failed: {err}");
            process::exit(1);
        }
    };

    if !response.is_success() {
        eprintln!(
            "error - couldn't assign contacts to list - code {}",
            response.status_code()
        );
        process::exit(1);
    }

    let job_id = response
        .data()
        .and_then(|data| data.first())
        .and_then(|job| job["ID"].as_u64());
    let Some(job_id) = job_id else {
        eprintln!("error - job response carried no ID");
        process::exit(1);
    };

    println!("success - CSV data {data_id} assigned to contactslist {list_id} (job {job_id})");
    job_id
}

/// Polls the import job until it completes, errors out, or the poll budget
/// runs out.
async fn monitor_job(client: &MailjetClient, job_id: u64) {
    for _ in 0..MAX_POLLS {
        let params = Params::new().method(Verb::View).id(job_id);

        let response = match client.call("batchjob", params).await {
            Ok(response) => response,
            Err(err) => {
                eprintln!("error - job poll failed: {err}");
                process::exit(1);
            }
        };

        if !response.is_success() {
            eprintln!(
                "error - couldn't monitor the job - code {}",
                response.status_code()
            );
            process::exit(1);
        }

        let job = response
            .data()
            .and_then(|data| data.first())
            .cloned()
            .unwrap_or_default();
        let status = job["Status"].as_str().unwrap_or("Unknown");

        println!("job {status}");

        match status {
            "Completed" => return,
            "Error" | "Abort" => {
                if let Some(error_file) = job["Errorfile"].as_str() {
                    eprintln!("error - import failed, error file: {error_file}");
                } else {
                    eprintln!("error - import failed");
                }
                process::exit(1);
            }
            _ => tokio::time::sleep(POLL_INTERVAL).await,
        }
    }

    eprintln!("error - job {job_id} still pending after {MAX_POLLS} polls");
    process::exit(1);
}

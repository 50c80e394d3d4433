//! Built-in job list used when no backend is configured or the fetch fails.
//! Field names deliberately vary the way real backend payloads do.

use serde_json::Value;

use crate::models::job::RawJobRecord;

struct DemoJob {
    id: u32,
    title: &'static str,
    company: &'static str,
    location: &'static str,
    job_type: &'static str,
    salary: &'static str,
    posted: &'static str,
    description: &'static str,
}

const DEMO_JOBS: &[DemoJob] = &[
    DemoJob {
        id: 1,
        title: "Cardiologist",
        company: "Fortis Healthcare",
        location: "Mumbai",
        job_type: "Full-time",
        salary: "₹3,00,000 – ₹4,50,000",
        posted: "3 days",
        description: "Consultant cardiologist for the cardiac care unit. DM Cardiology required.",
    },
    DemoJob {
        id: 2,
        title: "Staff Nurse",
        company: "Apollo Hospitals",
        location: "Chennai",
        job_type: "Full-time",
        salary: "₹25,000 – ₹35,000",
        posted: "1 week",
        description: "Registered nurse for general wards, rotating shifts. B.Sc Nursing.",
    },
    DemoJob {
        id: 3,
        title: "ICU Nurse",
        company: "Manipal Hospitals",
        location: "Bengaluru",
        job_type: "Full-time",
        salary: "₹40,000 – ₹55,000",
        posted: "2 days",
        description: "Critical care nursing, ventilator management experience preferred.",
    },
    DemoJob {
        id: 4,
        title: "Radiologist",
        company: "Max Healthcare",
        location: "New Delhi",
        job_type: "Contract",
        salary: "₹2,50,000",
        posted: "5 days",
        description: "MD Radiology for CT/MRI reporting. Six-month renewable contract.",
    },
    DemoJob {
        id: 5,
        title: "Pharmacist",
        company: "MedPlus",
        location: "Hyderabad",
        job_type: "Part-time",
        salary: "₹18,000 – ₹22,000",
        posted: "2 weeks",
        description: "Retail pharmacy dispensing and inventory. D.Pharm or B.Pharm.",
    },
    DemoJob {
        id: 6,
        title: "Physiotherapist",
        company: "Kokilaben Hospital",
        location: "Mumbai",
        job_type: "Part-time",
        salary: "₹30,000 – ₹40,000",
        posted: "4 days",
        description: "Outpatient musculoskeletal and post-operative rehabilitation.",
    },
    DemoJob {
        id: 7,
        title: "Medical Lab Technician",
        company: "Dr Lal PathLabs",
        location: "Gurugram",
        job_type: "Full-time",
        salary: "₹20,000 – ₹28,000",
        posted: "6 days",
        description: "Sample processing in haematology and biochemistry. DMLT required.",
    },
    DemoJob {
        id: 8,
        title: "Anaesthesiologist",
        company: "Narayana Health",
        location: "Bengaluru",
        job_type: "Full-time",
        salary: "₹3,50,000 – ₹5,00,000",
        posted: "3 weeks",
        description: "Cardiac anaesthesia team. MD/DNB Anaesthesiology.",
    },
    DemoJob {
        id: 9,
        title: "Dental Surgeon",
        company: "Clove Dental",
        location: "Pune",
        job_type: "Full-time",
        salary: "₹60,000 – ₹80,000",
        posted: "1 day",
        description: "General dentistry and minor oral surgery. BDS with registration.",
    },
    DemoJob {
        id: 10,
        title: "Night Duty Medical Officer",
        company: "Ruby Hall Clinic",
        location: "Pune",
        job_type: "Contract",
        salary: "₹70,000 – ₹90,000",
        posted: "10 days",
        description: "MBBS doctor for night emergency cover, 12 nights a month.",
    },
    DemoJob {
        id: 11,
        title: "Paediatric Nurse",
        company: "Rainbow Children's Hospital",
        location: "Hyderabad",
        job_type: "Full-time",
        salary: "₹28,000 – ₹38,000",
        posted: "8 days",
        description: "NICU and paediatric ward nursing. Paediatric experience preferred.",
    },
    DemoJob {
        id: 12,
        title: "Hospital Administrator",
        company: "AIIMS",
        location: "New Delhi",
        job_type: "Full-time",
        salary: "₹1,20,000 – ₹1,60,000",
        posted: "1 month",
        description: "Operations lead for outpatient services. MHA or MBA Healthcare.",
    },
    DemoJob {
        id: 13,
        title: "Dietitian",
        company: "Cloudnine Hospitals",
        location: "Chennai",
        job_type: "Part-time",
        salary: "Negotiable",
        posted: "12 days",
        description: "Maternal and neonatal nutrition counselling.",
    },
    DemoJob {
        id: 14,
        title: "Emergency Physician",
        company: "Fortis Healthcare",
        location: "Kolkata",
        job_type: "Full-time",
        salary: "₹2,00,000 – ₹2,80,000",
        posted: "Just now",
        description: "Emergency medicine consultant. MEM/DNB Emergency Medicine.",
    },
];

/// The demo list as raw records. Every other entry uses the alternate field
/// names (`city`, `job_type`, `salary_range`, `posted_at`).
pub fn demo_records() -> Vec<RawJobRecord> {
    DEMO_JOBS
        .iter()
        .map(|job| {
            let text = |s: &str| Some(Value::from(s));
            let mut raw = RawJobRecord {
                id: Some(Value::from(job.id)),
                title: text(job.title),
                company: text(job.company),
                description: text(job.description),
                ..RawJobRecord::default()
            };
            if job.id % 2 == 0 {
                raw.city = text(job.location);
                raw.job_type = text(job.job_type);
                raw.salary_range = text(job.salary);
                raw.posted_at = text(job.posted);
            } else {
                raw.location = text(job.location);
                raw.kind = text(job.job_type);
                raw.salary = text(job.salary);
                raw.posted = text(job.posted);
            }
            raw
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::normalizer::normalize_records;
    use chrono::Utc;
    use std::collections::HashSet;

    #[test]
    fn test_demo_ids_are_unique() {
        let records = normalize_records(&demo_records(), Utc::now());
        let ids: HashSet<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), records.len());
    }

    #[test]
    fn test_demo_records_normalize_without_gaps() {
        let records = normalize_records(&demo_records(), Utc::now());
        assert_eq!(records.len(), DEMO_JOBS.len());
        for record in &records {
            assert!(!record.title.is_empty());
            assert!(!record.location.is_empty(), "{}", record.id);
            assert!(!record.job_type.is_empty(), "{}", record.id);
            assert!(!record.posted.is_empty(), "{}", record.id);
            assert!(!record.saved);
        }
    }

    #[test]
    fn test_demo_list_spans_more_than_one_page() {
        assert!(DEMO_JOBS.len() > crate::listing::pagination::PAGE_SIZE * 2);
    }
}

use ecg_types::constants::{QRS_CONSENSUS_THRESHOLD, QRS_REFRACTORY_PERIOD, T_WAVE_CONSENSUS_THRESHOLD};
use ecg_types::{Boundary, EcgError};
use ndarray::Array1;
use rayon::prelude::*;

/// Multi-lead QRS consensus: each lead is filtered and scanned
/// independently (in parallel), every reported boundary votes for its
/// sample range, and a majority vote forms the consensus, with adjacent
/// consensus intervals closer than the refractory period merged together.
pub fn determine_qrs(leads: &[Array1<f64>], frequency: f64) -> Result<Vec<Boundary>, EcgError> {
    let n = validate_leads(leads, frequency)?;
    log::debug!("determine_qrs: fusing {} leads at {} Hz", leads.len(), frequency);

    let histograms: Vec<Array1<u32>> = leads
        .par_iter()
        .map(|samples| -> Result<Array1<u32>, EcgError> {
            let filtered = ecg_dsp::bandpass(samples, frequency)?;
            let boundaries = ecg_detect::qrs_boundaries(&filtered, frequency, false)?;
            Ok(vote(&boundaries, n))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let total = sum_histograms(histograms, n);
    let threshold = QRS_CONSENSUS_THRESHOLD * leads.len() as f64;
    let refractory = (frequency * QRS_REFRACTORY_PERIOD) as usize;
    log::trace!("determine_qrs: consensus threshold={} refractory={} samples", threshold, refractory);

    let consensus = build_consensus(&total, threshold, Some(refractory));
    log::debug!("determine_qrs: finished with {} consensus boundaries", consensus.len());
    Ok(consensus)
}

/// Multi-lead T-wave consensus. Runs on the raw (unfiltered) per-lead
/// samples against the already-agreed QRS boundaries, matching the
/// asymmetry in the source this was distilled from: QRS detection filters
/// before scanning, T-wave consensus does not.
pub fn determine_t_waves(
    leads: &[Array1<f64>],
    frequency: f64,
    qrs: &[Boundary],
) -> Result<Vec<Boundary>, EcgError> {
    let n = validate_leads(leads, frequency)?;
    log::debug!(
        "determine_t_waves: fusing {} leads at {} Hz over {} qrs complexes",
        leads.len(),
        frequency,
        qrs.len()
    );

    let histograms: Vec<Array1<u32>> = leads
        .par_iter()
        .map(|samples| -> Result<Array1<u32>, EcgError> {
            let boundaries = ecg_detect::t_wave_boundaries(qrs, samples, frequency, false)?;
            Ok(vote(&boundaries, n))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let total = sum_histograms(histograms, n);
    let threshold = T_WAVE_CONSENSUS_THRESHOLD * leads.len() as f64;
    log::trace!("determine_t_waves: consensus threshold={}", threshold);

    let consensus = build_consensus(&total, threshold, None);
    log::debug!("determine_t_waves: finished with {} consensus boundaries", consensus.len());
    Ok(consensus)
}

fn vote(boundaries: &[Boundary], n: usize) -> Array1<u32> {
    let mut hist = Array1::<u32>::zeros(n);
    for b in boundaries {
        let hi = b.end.min(n.saturating_sub(1));
        for i in b.start..=hi {
            hist[i] += 1;
        }
    }
    hist
}

fn sum_histograms(histograms: Vec<Array1<u32>>, n: usize) -> Array1<u32> {
    histograms
        .into_iter()
        .fold(Array1::<u32>::zeros(n), |acc, h| acc + h)
}

/// Extracts maximal runs where the vote count meets `threshold`, then
/// (if `refractory` is set) merges consensus intervals whose starts fall
/// closer together than the refractory period, restarting the scan after
/// each merge since a merge can bring a third interval into range.
fn build_consensus(counts: &Array1<u32>, threshold: f64, refractory: Option<usize>) -> Vec<Boundary> {
    let mut consensus = Vec::new();
    let mut run_start: Option<usize> = None;

    for i in 0..counts.len() {
        if counts[i] as f64 >= threshold {
            if run_start.is_none() {
                run_start = Some(i);
            }
        } else if let Some(start) = run_start.take() {
            consensus.push(Boundary::new(start, i - 1));
        }
    }
    if let Some(start) = run_start {
        consensus.push(Boundary::new(start, counts.len() - 1));
    }

    if let Some(refractory) = refractory {
        loop {
            let mut merged_any = false;
            for i in 1..consensus.len() {
                if consensus[i - 1].start + refractory > consensus[i].start {
                    consensus[i - 1] = Boundary::new(consensus[i - 1].start, consensus[i].end);
                    consensus.remove(i);
                    merged_any = true;
                    break;
                }
            }
            if !merged_any {
                break;
            }
        }
    }

    consensus
}

fn validate_leads(leads: &[Array1<f64>], frequency: f64) -> Result<usize, EcgError> {
    if frequency <= 0.0 {
        return Err(EcgError::InvalidFrequency(frequency));
    }
    let first = leads.first().ok_or(EcgError::NoLeads)?;
    if first.is_empty() {
        return Err(EcgError::EmptySamples);
    }
    for lead in leads.iter().skip(1) {
        if lead.len() != first.len() {
            return Err(EcgError::LeadLengthMismatch(first.len(), lead.len()));
        }
    }
    Ok(first.len())
}

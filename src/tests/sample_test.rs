#[cfg(test)]
mod tests {
    use crate::args::PrepareConfig;
    use crate::flow_record::FlowRecord;
    use crate::prepare::labels::Dataset;
    use crate::prepare::sample::subsample;

    fn setup_dataset(rows: usize) -> Dataset {
        let records = (0..rows)
            .map(|i| FlowRecord {
                src_addr: format!("10.0.{}.{}", i / 256, i % 256),
                dst_addr: "10.9.9.9".to_string(),
                src_port: (i % 65536) as u16,
                dst_port: 80,
                protocol: "6".to_string(),
                l7_protocol: "0.0".to_string(),
                in_bytes: i as u64,
                out_bytes: 0,
                in_pkts: 1,
                out_pkts: 1,
                tcp_flags: "2".to_string(),
                flow_duration_ms: 5,
            })
            .collect::<Vec<_>>();
        let target = (0..rows).map(|i| (i % 2).to_string()).collect();
        Dataset {
            records,
            target_name: "Label",
            target,
        }
    }

    fn setup_config(sample: bool, sample_size: usize, seed: u64) -> PrepareConfig {
        PrepareConfig {
            sample,
            sample_size,
            seed,
            ..PrepareConfig::default()
        }
    }

    #[test]
    fn test_large_table_is_cut_to_sample_size() {
        let dataset = subsample(setup_dataset(250), &setup_config(true, 100, 42));
        assert_eq!(dataset.len(), 100);
        assert_eq!(dataset.target.len(), 100);
    }

    #[test]
    fn test_small_table_passes_through() {
        let dataset = subsample(setup_dataset(50), &setup_config(true, 100, 42));
        assert_eq!(dataset.len(), 50);
    }

    #[test]
    fn test_exact_size_table_passes_through() {
        let dataset = subsample(setup_dataset(100), &setup_config(true, 100, 42));
        assert_eq!(dataset.len(), 100);
    }

    #[test]
    fn test_disabled_sampling_passes_through() {
        let dataset = subsample(setup_dataset(250), &setup_config(false, 100, 42));
        assert_eq!(dataset.len(), 250);
    }

    #[test]
    fn test_rows_stay_aligned_after_sampling() {
        let dataset = subsample(setup_dataset(250), &setup_config(true, 100, 42));
        for (record, target) in dataset.records.iter().zip(dataset.target.iter()) {
            assert_eq!((record.in_bytes % 2).to_string(), *target);
        }
    }

    #[test]
    fn test_sampling_is_seeded() {
        let first = subsample(setup_dataset(250), &setup_config(true, 100, 7));
        let second = subsample(setup_dataset(250), &setup_config(true, 100, 7));
        let firsts: Vec<u64> = first.records.iter().map(|r| r.in_bytes).collect();
        let seconds: Vec<u64> = second.records.iter().map(|r| r.in_bytes).collect();
        assert_eq!(firsts, seconds);
    }

    #[test]
    fn test_sampling_is_without_replacement() {
        let dataset = subsample(setup_dataset(250), &setup_config(true, 100, 42));
        let mut picked: Vec<u64> = dataset.records.iter().map(|r| r.in_bytes).collect();
        picked.sort_unstable();
        picked.dedup();
        assert_eq!(picked.len(), 100);
    }
}

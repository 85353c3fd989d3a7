#[cfg(test)]
mod tests {
    use csv::StringRecord;

    use crate::errors::PipelineError;
    use crate::loader::RawTable;
    use crate::prepare::normalize::normalize;
    use crate::prepare::select::project;

    fn setup_table(src_port: &str, dst_port: &str, in_bytes: &str) -> RawTable {
        let headers = StringRecord::from(vec![
            "IPV4_SRC_ADDR",
            "IPV4_DST_ADDR",
            "L4_SRC_PORT",
            "L4_DST_PORT",
            "PROTOCOL",
            "L7_PROTO",
            "IN_BYTES",
            "OUT_BYTES",
            "IN_PKTS",
            "OUT_PKTS",
            "TCP_FLAGS",
            "FLOW_DURATION_MILLISECONDS",
            "Label",
            "Attack",
        ]);
        let rows = vec![StringRecord::from(vec![
            "192.168.1.10",
            "172.16.0.2",
            src_port,
            dst_port,
            "6",
            "7.0",
            in_bytes,
            "3400",
            "10",
            "12",
            "27",
            "1500",
            "0",
            "Benign",
        ])];
        RawTable::new(headers, rows)
    }

    #[test]
    fn test_ports_in_range_are_preserved() {
        let projected = project(&setup_table("0", "65535", "1200")).unwrap();
        let (records, labels) = normalize(projected).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(labels.len(), 1);
        assert_eq!(records[0].src_port, 0);
        assert_eq!(records[0].dst_port, 65535);
    }

    #[test]
    fn test_port_above_u16_is_a_range_error() {
        let projected = project(&setup_table("70000", "80", "1200")).unwrap();
        match normalize(projected) {
            Err(PipelineError::Range { column, value, .. }) => {
                assert_eq!(column, "L4_SRC_PORT");
                assert_eq!(value, "70000");
            }
            other => panic!("expected range error, got {:?}", other.map(|(r, _)| r.len())),
        }
    }

    #[test]
    fn test_negative_port_is_a_range_error() {
        let projected = project(&setup_table("443", "-1", "1200")).unwrap();
        match normalize(projected) {
            Err(PipelineError::Range { column, .. }) => assert_eq!(column, "L4_DST_PORT"),
            other => panic!("expected range error, got {:?}", other.map(|(r, _)| r.len())),
        }
    }

    #[test]
    fn test_negative_counter_is_a_range_error() {
        let projected = project(&setup_table("443", "80", "-5")).unwrap();
        match normalize(projected) {
            Err(PipelineError::Range { column, .. }) => assert_eq!(column, "IN_BYTES"),
            other => panic!("expected range error, got {:?}", other.map(|(r, _)| r.len())),
        }
    }

    #[test]
    fn test_typed_fields_round_to_record() {
        let projected = project(&setup_table("443", "51000", "1200")).unwrap();
        let (records, labels) = normalize(projected).unwrap();
        let record = &records[0];
        assert_eq!(record.src_addr, "192.168.1.10");
        assert_eq!(record.dst_addr, "172.16.0.2");
        assert_eq!(record.protocol, "6");
        assert_eq!(record.l7_protocol, "7.0");
        assert_eq!(record.in_bytes, 1200);
        assert_eq!(record.out_bytes, 3400);
        assert_eq!(record.in_pkts, 10);
        assert_eq!(record.out_pkts, 12);
        assert_eq!(record.tcp_flags, "27");
        assert_eq!(record.flow_duration_ms, 1500);
        assert_eq!(labels[0].label, "0");
        assert_eq!(labels[0].attack, "Benign");
    }

    #[test]
    fn test_same_address_text_shares_identity() {
        let headers = StringRecord::from(vec![
            "IPV4_SRC_ADDR",
            "IPV4_DST_ADDR",
            "L4_SRC_PORT",
            "L4_DST_PORT",
            "PROTOCOL",
            "L7_PROTO",
            "IN_BYTES",
            "OUT_BYTES",
            "IN_PKTS",
            "OUT_PKTS",
            "TCP_FLAGS",
            "FLOW_DURATION_MILLISECONDS",
            "Label",
            "Attack",
        ]);
        let row = vec![
            "10.1.2.3", "10.9.9.9", "443", "80", "6", "0.0", "1", "1", "1", "1", "2", "5", "0",
            "Benign",
        ];
        let rows = vec![StringRecord::from(row.clone()), StringRecord::from(row)];
        let projected = project(&RawTable::new(headers, rows)).unwrap();
        let (records, _) = normalize(projected).unwrap();
        assert_eq!(records[0].src_addr, records[1].src_addr);
    }
}

use std::sync::Once;

use whad_proto::ble::{self, BdAddress, BleAddrType, BleDirection, ChannelMap, SequenceTrigger};
use whad_proto::discovery::{self, Capabilities, DeviceType, DomainCapabilities, RadioDomain};
use whad_proto::generic::{self, ResultCode};
use whad_proto::payload::Pdu;
use whad_proto::phy::{self, FrequencyRange, Timestamp};
use whad_proto::zigbee::{self, AddressType, MitmRole};
use whad_proto::{esb, unifying, MessageType, TypedMessage, WhadMessage};

static INIT: Once = Once::new();

fn setup() {
    INIT.call_once(|| {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
            .is_test(true)
            .try_init();
    });
}

fn pdu(bytes: &[u8]) -> Pdu {
    Pdu::new(bytes).expect("pdu fits")
}

fn address(last: u8) -> BdAddress {
    BdAddress::new([0x11, 0x22, 0x33, 0x44, 0x55, last])
}

fn data_channels() -> ChannelMap {
    ChannelMap::from_channels([0, 1, 2, 12, 24, 36])
}

fn esb_address() -> esb::EsbAddress {
    esb::EsbAddress::new(&[0xca, 0xfe, 0xba, 0xbe]).expect("address fits")
}

fn generic_messages() -> Vec<WhadMessage> {
    vec![
        generic::CmdResult::new(ResultCode::WrongMode).into(),
        generic::Verbose { data: pdu(b"sniffing on 37") }.into(),
        generic::DebugMessage { level: 3, data: pdu(b"rx overflow") }.into(),
        generic::Progress { value: 42 }.into(),
    ]
}

fn discovery_messages() -> Vec<WhadMessage> {
    vec![
        discovery::InfoQuery { proto_ver: 2 }.into(),
        discovery::InfoResp {
            device_type: DeviceType::Yardstick,
            device_id: discovery::DeviceId::new(&[0x01, 0x02, 0x03]).expect("fits"),
            proto_min_ver: 1,
            max_speed: 921_600,
            fw_author: discovery::FirmwareString::new(b"rf lab").expect("fits"),
            fw_url: discovery::FirmwareString::new(b"https://example.org/fw").expect("fits"),
            fw_version: discovery::FirmwareVersion { major: 2, minor: 0, rev: 7 },
            capabilities: vec![
                DomainCapabilities::new(RadioDomain::Esb, Capabilities::SNIFF | Capabilities::JAM),
                DomainCapabilities::new(RadioDomain::Phy, Capabilities::INJECT),
            ],
        }
        .into(),
        discovery::ResetQuery {}.into(),
        discovery::ReadyResp {}.into(),
        discovery::DomainQuery { domain: RadioDomain::LogitechUnifying }.into(),
        discovery::DomainResp { domain: RadioDomain::Zigbee, supported_commands: 0b1_0110 }.into(),
        discovery::SetSpeed { speed: 460_800 }.into(),
    ]
}

fn ble_messages() -> Vec<WhadMessage> {
    let adv = ble::AdvData::new(&[0x02, 0x01, 0x06, 0x03, 0x09, b'h', b'i']).expect("fits");
    let scanrsp = ble::AdvData::new(&[0x02, 0x0a, 0x04]).expect("fits");
    let pattern = ble::Pattern::new(&[0xd6, 0xbe, 0x89, 0x8e]).expect("fits");
    let mask = ble::Pattern::new(&[0xff, 0xff, 0x00, 0xff]).expect("fits");

    vec![
        ble::SetBdAddress { bd_address: address(0x01), addr_type: BleAddrType::Random }.into(),
        ble::SniffAdv { use_extended_adv: true, channel: 38, bd_address: address(0x02) }.into(),
        ble::JamAdv {}.into(),
        ble::JamAdvOnChannel { channel: 39 }.into(),
        ble::ReactiveJam { channel: 12, pattern, position: 4 }.into(),
        ble::SniffConnReq {
            show_empty_packets: true,
            show_advertisements: true,
            channel: 37,
            bd_address: address(0x03),
        }
        .into(),
        ble::SniffAccessAddress { monitored_channels: data_channels() }.into(),
        ble::SniffActiveConn {
            access_address: 0x5065_9a3c,
            monitored_channels: ChannelMap::ALL_DATA_CHANNELS,
            ..Default::default()
        }
        .with_crc_init(0x12_3456)
        .with_channel_map(data_channels())
        .with_hop_interval(36)
        .with_hop_increment(11)
        .into(),
        ble::JamConn { access_address: 0x5065_9a3c }.into(),
        ble::ScanMode { active_scan: true }.into(),
        ble::AdvMode { scan_data: adv, scanrsp_data: scanrsp }.into(),
        ble::SetAdvData { scan_data: adv, scanrsp_data: ble::AdvData::empty() }.into(),
        ble::CentralMode {}.into(),
        ble::ConnectTo::new(address(0x04), BleAddrType::Random)
            .with_access_address(0x8e89_bed6)
            .with_crc_init(0x55_5555)
            .into(),
        ble::SendRawPdu {
            direction: BleDirection::MasterToSlave,
            conn_handle: 3,
            access_address: 0x5065_9a3c,
            pdu: pdu(&[0x02, 0x07, 0x03, 0x00, 0x04, 0x00, 0x0a, 0x03, 0x00]),
            crc: 0xab_cdef,
            encrypt: true,
        }
        .into(),
        ble::SendPdu {
            direction: BleDirection::SlaveToMaster,
            conn_handle: 3,
            pdu: pdu(&[0x0b, 0x01, 0x00]),
            encrypt: true,
        }
        .into(),
        ble::Disconnect { conn_handle: 3 }.into(),
        ble::PeripheralMode { scan_data: adv, scanrsp_data: scanrsp }.into(),
        ble::Start {}.into(),
        ble::Stop {}.into(),
        ble::HijackMaster { access_address: 0x1122_3344 }.into(),
        ble::HijackSlave { access_address: 0x1122_3344 }.into(),
        ble::HijackBoth { access_address: 0x1122_3344 }.into(),
        ble::SetEncryption {
            conn_handle: 1,
            enabled: true,
            ll_key: [0x5a; 16],
            ll_iv: [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08],
            key: [0xa5; 16],
            rand: [0x10; 8],
            ediv: [0xbe, 0xef],
        }
        .into(),
        ble::PrepareSequence {
            id: 7,
            direction: BleDirection::InjectionToSlave,
            trigger: SequenceTrigger::Reception { pattern, mask, offset: 2 },
            sequence: vec![pdu(&[0x02, 0x00]), pdu(&[0x0e, 0x01, 0x00])],
        }
        .into(),
        ble::Trigger { id: 7 }.into(),
        ble::DeleteSequence { id: 7 }.into(),
        ble::AccessAddressDiscovered { access_address: 0xaf9a_9e03, ..Default::default() }
            .with_rssi(-71)
            .with_timestamp(1_000_123)
            .into(),
        ble::AdvPduReceived {
            adv_type: ble::BleAdvType::AdvScanRsp,
            rssi: -48,
            bd_address: address(0x05),
            adv_data: scanrsp,
            addr_type: BleAddrType::Public,
        }
        .into(),
        ble::Connected {
            initiator: address(0x06),
            advertiser: address(0x07),
            access_address: 0x5065_9a3c,
            conn_handle: 9,
            adv_addr_type: BleAddrType::Random,
            init_addr_type: BleAddrType::Random,
        }
        .into(),
        ble::Disconnected { reason: 0x13, conn_handle: 9 }.into(),
        ble::Synchronized {
            access_address: 0x5065_9a3c,
            crc_init: 0x0a_0b0c,
            hop_interval: 24,
            hop_increment: 9,
            channel_map: data_channels(),
        }
        .into(),
        ble::Desynchronized { access_address: 0x5065_9a3c }.into(),
        ble::Hijacked { success: true, access_address: 0x5065_9a3c }.into(),
        ble::Injected { success: true, access_address: 0x5065_9a3c, injection_attempts: 4 }.into(),
        ble::RawPduReceived {
            direction: BleDirection::MasterToSlave,
            channel: 21,
            access_address: 0x5065_9a3c,
            pdu: pdu(&[0x01, 0x00]),
            crc: 0x00_1234,
            conn_handle: 9,
            processed: true,
            decrypted: true,
            ..Default::default()
        }
        .with_rssi(-55)
        .with_relative_timestamp(1250)
        .with_crc_validity(true)
        .into(),
        ble::PduReceived {
            direction: BleDirection::SlaveToMaster,
            pdu: pdu(&[0x03, 0x01, 0x00]),
            conn_handle: 9,
            processed: true,
            decrypted: true,
        }
        .into(),
        ble::Triggered { id: 7 }.into(),
    ]
}

fn zigbee_messages() -> Vec<WhadMessage> {
    vec![
        zigbee::SetNodeAddress::new(0x1234, AddressType::Short).expect("short address").into(),
        zigbee::SniffMode { channel: 11 }.into(),
        zigbee::JamMode { channel: 12 }.into(),
        zigbee::EnergyDetectionMode { channel: 13 }.into(),
        zigbee::EndDeviceMode { channel: 14 }.into(),
        zigbee::RouterMode { channel: 15 }.into(),
        zigbee::CoordinatorMode { channel: 16 }.into(),
        zigbee::Start {}.into(),
        zigbee::Stop {}.into(),
        zigbee::SendPdu { channel: 17, pdu: pdu(&[0x41, 0x88, 0x01]) }.into(),
        zigbee::SendRawPdu { channel: 18, pdu: pdu(&[0x41, 0x88, 0x02]), fcs: 0xbeef }.into(),
        zigbee::ManInTheMiddleMode { role: MitmRole::Correlator }.into(),
        zigbee::RawPduReceived {
            channel: 19,
            pdu: pdu(&[0x63, 0x88]),
            fcs: 0xabcd,
            ..Default::default()
        }
        .with_timestamp(77)
        .with_fcs_validity(true)
        .with_lqi(200)
        .into(),
        zigbee::PduReceived { channel: 20, pdu: pdu(&[0x63, 0x88]), ..Default::default() }
            .with_rssi(-80)
            .with_fcs_validity(false)
            .into(),
        zigbee::EnergyDetectionSample { timestamp: 900, sample: 63 }.into(),
        zigbee::Jammed { timestamp: 901 }.into(),
    ]
}

fn esb_messages() -> Vec<WhadMessage> {
    vec![
        esb::SetNodeAddress { address: esb_address() }.into(),
        esb::SniffMode::promiscuous(esb::AUTO_CHANNEL).into(),
        esb::JamMode { channel: 5 }.into(),
        esb::SendPdu { channel: 6, pdu: pdu(&[0x00, 0xc2]), retransmission_count: 3 }.into(),
        esb::SendRawPdu { channel: 7, pdu: pdu(&[0xaa, 0x00, 0xc2]), retransmission_count: 1 }
            .into(),
        esb::PrxMode { channel: 8 }.into(),
        esb::PtxMode { channel: 9 }.into(),
        esb::Start {}.into(),
        esb::Stop {}.into(),
        esb::RawPduReceived { channel: 10, pdu: pdu(&[0xaa, 0x01]), ..Default::default() }
            .with_crc_validity(true)
            .with_address(esb_address())
            .into(),
        esb::PduReceived { channel: 11, pdu: pdu(&[0x01]), ..Default::default() }
            .with_rssi(-33)
            .with_timestamp(4242)
            .into(),
        esb::Jammed { timestamp: 12 }.into(),
    ]
}

fn unifying_messages() -> Vec<WhadMessage> {
    vec![
        unifying::SetNodeAddress { address: esb_address() }.into(),
        unifying::SniffMode { channel: 62, address: esb_address(), show_acknowledgements: true }
            .into(),
        unifying::JamMode { channel: 5 }.into(),
        unifying::SendPdu { channel: 5, pdu: pdu(&[0x00, 0x4f]), retransmission_count: 2 }.into(),
        unifying::SendRawPdu { channel: 5, pdu: pdu(&[0x00, 0x4f, 0x00]), retransmission_count: 2 }
            .into(),
        unifying::DongleMode { channel: 23 }.into(),
        unifying::KeyboardMode { channel: 32 }.into(),
        unifying::MouseMode { channel: 41 }.into(),
        unifying::Start {}.into(),
        unifying::Stop {}.into(),
        unifying::SniffPairing {}.into(),
        unifying::RawPduReceived {
            channel: 62,
            pdu: pdu(&[0x00, 0xc2, 0x00]),
            ..Default::default()
        }
        .with_rssi(-20)
        .with_timestamp(31)
        .into(),
        unifying::PduReceived { channel: 62, pdu: pdu(&[0x00, 0xc2]), ..Default::default() }
            .with_address(esb_address())
            .into(),
        unifying::Jammed { timestamp: 63 }.into(),
    ]
}

fn phy_messages() -> Vec<WhadMessage> {
    vec![
        phy::SetAskModulation { on_off_keying: true }.into(),
        phy::SetFskModulation { deviation: 20_000 }.into(),
        phy::SetGfskModulation { deviation: 25_000 }.into(),
        phy::SetBpskModulation {}.into(),
        phy::SetQpskModulation { offset_qpsk: true }.into(),
        phy::SetLoRaModulation {
            bandwidth: 125_000,
            spreading_factor: phy::LoRaSpreadingFactor::Sf9,
            coding_rate: phy::LoRaCodingRate::Cr48,
            preamble_length: 12,
            enable_crc: true,
            explicit_mode: true,
            invert_iq: true,
        }
        .into(),
        phy::GetSupportedFrequencies {}.into(),
        phy::SetFrequency { frequency: 868_100_000 }.into(),
        phy::SetDataRate { rate: 38_400 }.into(),
        phy::SetEndianness { endianness: phy::Endianness::Little }.into(),
        phy::SetTxPower { tx_power: phy::TxPower::High }.into(),
        phy::SetPacketSize { packet_size: 64 }.into(),
        phy::SetSyncWord { sync_word: phy::SyncWord::new(&[0x2d, 0xd4]).expect("fits") }.into(),
        phy::SniffMode { iq_stream: true }.into(),
        phy::SendPacket { packet: pdu(&[0xaa, 0xaa, 0x2d, 0xd4, 0x01]) }.into(),
        phy::JamMode { mode: phy::JammingMode::Reactive }.into(),
        phy::MonitorMode {}.into(),
        phy::Start {}.into(),
        phy::Stop {}.into(),
        phy::SupportedFrequencyRanges {
            frequency_ranges: vec![
                FrequencyRange { start: 433_050_000, end: 434_790_000 },
                FrequencyRange { start: 863_000_000, end: 870_000_000 },
            ],
        }
        .into(),
        phy::PacketReceived {
            frequency: 433_920_000,
            packet: pdu(&[0x01, 0x02]),
            ..Default::default()
        }
        .with_rssi(-90)
        .with_timestamp(Timestamp { sec: 5, usec: 250 })
        .into(),
        phy::Jammed { timestamp: Timestamp { sec: 6, usec: 1 } }.into(),
        phy::MonitoringReport { report: vec![1, 0, 3, 7], ..Default::default() }
            .with_timestamp(Timestamp { sec: 7, usec: 999_999 })
            .into(),
    ]
}

fn all_messages() -> Vec<WhadMessage> {
    [
        generic_messages(),
        discovery_messages(),
        ble_messages(),
        zigbee_messages(),
        esb_messages(),
        unifying_messages(),
        phy_messages(),
    ]
    .concat()
}

#[test]
fn populated_messages_cover_every_kind_once() {
    setup();

    let types: Vec<MessageType> = all_messages().iter().map(WhadMessage::message_type).collect();
    let expected: Vec<MessageType> = MessageType::all().collect();
    assert_eq!(types, expected);
}

#[test]
fn populated_messages_survive_the_wire() {
    setup();

    for message in all_messages() {
        let bytes = whad_proto::encode(message.clone());
        let decoded = whad_proto::decode(&bytes)
            .unwrap_or_else(|err| panic!("{} did not decode: {err}", message.message_type()));
        assert_eq!(decoded, message, "{} changed on the wire", message.message_type());
        assert_eq!(decoded.encode(), bytes);
    }
}

#[test]
fn populated_messages_survive_json() {
    setup();

    for message in all_messages() {
        let json = serde_json::to_string(&message).expect("serialize");
        let back: WhadMessage = serde_json::from_str(&json)
            .unwrap_or_else(|err| panic!("{} did not parse back: {err}", message.message_type()));
        assert_eq!(back, message);
        assert_eq!(whad_proto::encode(back), whad_proto::encode(message));
    }
}

/// Every subset of `count` optional fields, as bitmasks.
fn subsets(count: u32) -> impl Iterator<Item = u32> {
    0..(1u32 << count)
}

fn present(mask: u32, bit: u32) -> bool {
    mask & (1 << bit) != 0
}

#[test]
fn ble_sniff_active_conn_presence() {
    setup();

    for mask in subsets(4) {
        let mut msg = ble::SniffActiveConn {
            access_address: 0x5065_9a3c,
            monitored_channels: data_channels(),
            ..Default::default()
        };
        if present(mask, 0) {
            msg = msg.with_crc_init(0);
        }
        if present(mask, 1) {
            msg = msg.with_channel_map(ChannelMap::new([0; 5]));
        }
        if present(mask, 2) {
            msg = msg.with_hop_interval(0);
        }
        if present(mask, 3) {
            msg = msg.with_hop_increment(0);
        }

        let decoded = ble::SniffActiveConn::decode(&msg.encode()).expect("sniff active conn");
        assert_eq!(decoded, msg, "subset {mask:04b}");
        assert_eq!(decoded.has_crc_init(), present(mask, 0));
        assert_eq!(decoded.has_channel_map(), present(mask, 1));
        assert_eq!(decoded.has_hop_interval(), present(mask, 2));
        assert_eq!(decoded.has_hop_increment(), present(mask, 3));
        assert_eq!(decoded.crc_init(), 0);
        assert_eq!(decoded.hop_interval(), 0);
    }
}

#[test]
fn ble_access_address_discovered_presence() {
    setup();

    for mask in subsets(2) {
        let mut msg =
            ble::AccessAddressDiscovered { access_address: 0xaf9a_9e03, ..Default::default() };
        if present(mask, 0) {
            msg = msg.with_rssi(-64);
        }
        if present(mask, 1) {
            msg = msg.with_timestamp(0);
        }

        let decoded = ble::AccessAddressDiscovered::decode(&msg.encode()).expect("aa discovered");
        assert_eq!(decoded, msg, "subset {mask:02b}");
        assert_eq!(decoded.has_rssi(), present(mask, 0));
        assert_eq!(decoded.has_timestamp(), present(mask, 1));
        assert_eq!(decoded.rssi(), if present(mask, 0) { -64 } else { 0 });
    }
}

#[test]
fn zigbee_raw_pdu_received_presence() {
    setup();

    for mask in subsets(4) {
        let mut msg = zigbee::RawPduReceived {
            channel: 11,
            pdu: pdu(&[0x41, 0x88]),
            fcs: 0xabcd,
            ..Default::default()
        };
        if present(mask, 0) {
            msg = msg.with_rssi(-40);
        }
        if present(mask, 1) {
            msg = msg.with_timestamp(0);
        }
        if present(mask, 2) {
            msg = msg.with_fcs_validity(false);
        }
        if present(mask, 3) {
            msg = msg.with_lqi(0);
        }

        let decoded = zigbee::RawPduReceived::decode(&msg.encode()).expect("raw pdu received");
        assert_eq!(decoded, msg, "subset {mask:04b}");
        assert_eq!(decoded.has_rssi(), present(mask, 0));
        assert_eq!(decoded.has_timestamp(), present(mask, 1));
        assert_eq!(decoded.has_fcs_validity(), present(mask, 2));
        assert_eq!(decoded.has_lqi(), present(mask, 3));
        assert!(!decoded.fcs_validity());
    }
}

#[test]
fn esb_pdu_received_presence() {
    setup();

    for mask in subsets(4) {
        let mut msg = esb::PduReceived { channel: 8, pdu: pdu(&[0x00]), ..Default::default() };
        if present(mask, 0) {
            msg = msg.with_rssi(0);
        }
        if present(mask, 1) {
            msg = msg.with_timestamp(0);
        }
        if present(mask, 2) {
            msg = msg.with_crc_validity(false);
        }
        if present(mask, 3) {
            msg = msg.with_address(esb::EsbAddress::empty());
        }

        let decoded = esb::PduReceived::decode(&msg.encode()).expect("pdu received");
        assert_eq!(decoded, msg, "subset {mask:04b}");
        assert_eq!(decoded.has_rssi(), present(mask, 0));
        assert_eq!(decoded.has_timestamp(), present(mask, 1));
        assert_eq!(decoded.has_crc_validity(), present(mask, 2));
        assert_eq!(decoded.has_address(), present(mask, 3));
    }
}

#[test]
fn unifying_raw_pdu_received_presence() {
    setup();

    for mask in subsets(4) {
        let mut msg =
            unifying::RawPduReceived { channel: 62, pdu: pdu(&[0x00, 0xc2]), ..Default::default() };
        if present(mask, 0) {
            msg = msg.with_rssi(-12);
        }
        if present(mask, 1) {
            msg = msg.with_timestamp(99);
        }
        if present(mask, 2) {
            msg = msg.with_crc_validity(true);
        }
        if present(mask, 3) {
            msg = msg.with_address(esb_address());
        }

        let decoded = unifying::RawPduReceived::decode(&msg.encode()).expect("raw pdu received");
        assert_eq!(decoded, msg, "subset {mask:04b}");
        assert_eq!(decoded.has_crc_validity(), present(mask, 2));
        assert_eq!(decoded.has_address(), present(mask, 3));
    }
}

#[test]
fn phy_timestamp_presence() {
    setup();

    for with_timestamp in [false, true] {
        let mut report = phy::MonitoringReport { report: vec![4, 2], ..Default::default() };
        if with_timestamp {
            report = report.with_timestamp(Timestamp::default());
        }
        let decoded = phy::MonitoringReport::decode(&report.encode()).expect("monitoring report");
        assert_eq!(decoded, report);
        assert_eq!(decoded.has_timestamp(), with_timestamp);
        assert_eq!(decoded.timestamp(), Timestamp::default());
    }

    for mask in subsets(2) {
        let mut packet = phy::PacketReceived {
            frequency: 433_920_000,
            packet: pdu(&[0x55]),
            ..Default::default()
        };
        if present(mask, 0) {
            packet = packet.with_rssi(0);
        }
        if present(mask, 1) {
            packet = packet.with_timestamp(Timestamp { sec: 0, usec: 0 });
        }
        let decoded = phy::PacketReceived::decode(&packet.encode()).expect("packet received");
        assert_eq!(decoded, packet, "subset {mask:02b}");
        assert_eq!(decoded.has_rssi(), present(mask, 0));
        assert_eq!(decoded.has_timestamp(), present(mask, 1));
    }
}

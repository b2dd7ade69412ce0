use {
    crate::{RegisterError, bus::Bus, mutex::Mutex, register::Register, transport::Transport},
    ax_packet::{Status, control_table::Item},
    paste::paste,
};

macro_rules! control_table_methods {
    ($table:ident: $($item:ident),* $(,)?) => {
        paste! {
            $(
                #[inline(always)]
                pub const fn [< $item:snake >](
                    &self,
                ) -> Register<
                    'bus,
                    M,
                    <::ax_packet::control_table::$table::$item as Item>::Width,
                    <::ax_packet::control_table::$table::$item as Item>::Access,
                > {
                    Register::new(
                        self.bus,
                        self.id,
                        <::ax_packet::control_table::$table::$item as Item>::ADDRESS,
                    )
                }
            )*
        }
    };
}

macro_rules! device {
    ($(#[$meta:meta])* $name:ident, $table:ident: $($item:ident),* $(,)?) => {
        $(#[$meta])*
        pub struct $name<'bus, M> {
            bus: &'bus M,
            id: u8,
        }

        impl<'bus, M> $name<'bus, M> {
            #[inline(always)]
            pub const fn new(bus: &'bus M, id: u8) -> Self {
                Self { bus, id }
            }

            /// The ID this handle talks to, not to be confused with the `id` register.
            #[inline(always)]
            pub const fn ident(&self) -> u8 {
                self.id
            }

            control_table_methods!($table: $($item),*);
        }

        impl<T: Transport, M: Mutex<Item = Bus<T>>> $name<'_, M> {
            #[inline]
            pub fn ping(&self) -> Result<Status, RegisterError<T, M>> {
                self.bus
                    .lock()
                    .map_err(RegisterError::Mutex)?
                    .ping(self.id)
                    .map_err(RegisterError::Bus)
            }
        }
    };
}

device!(
    /// AX-12 actuator.
    Ax12,
    ax12:
    ModelNumber,
    FirmwareVersion,
    Id,
    BaudRate,
    ReturnDelayTime,
    CwAngleLimit,
    CcwAngleLimit,
    TemperatureLimit,
    MinVoltageLimit,
    MaxVoltageLimit,
    MaxTorque,
    StatusReturnLevel,
    AlarmLed,
    Shutdown,
    TorqueEnable,
    Led,
    CwComplianceMargin,
    CcwComplianceMargin,
    CwComplianceSlope,
    CcwComplianceSlope,
    GoalPosition,
    MovingSpeed,
    TorqueLimit,
    PresentPosition,
    PresentSpeed,
    PresentLoad,
    PresentVoltage,
    PresentTemperature,
    Registered,
    Moving,
    Lock,
    Punch,
);

device!(
    /// AX-S1 sensor module.
    AxS1,
    ax_s1:
    ModelNumber,
    FirmwareVersion,
    Id,
    BaudRate,
    ReturnDelayTime,
    StatusReturnLevel,
    IrLeftFireData,
    IrCenterFireData,
    IrRightFireData,
    LightLeftData,
    LightCenterData,
    LightRightData,
    IrObstacleDetected,
    LightDetected,
    SoundData,
    SoundDataMaxHold,
    SoundDetectedCount,
    SoundDetectedTime,
    BuzzerNote,
    BuzzerRingingTime,
    Registered,
    IrRemoconArrived,
    Lock,
    RemoconRx,
    RemoconTx,
    IrObstacleDetectCompare,
    LightDetectCompare,
);

#[cfg(test)]
mod test {
    use {super::*, crate::test_util::Script, core::cell::RefCell};

    #[test]
    fn ax12_present_position() {
        let bus = RefCell::new(Bus::new(
            Script::new()
                .expect_send(&[0xFF, 0xFF, 0x03, 0x04, 0x02, 0x24, 0x02, 0xD0])
                .expect_receive(4, &[0xFF, 0xFF, 0x03, 0x04])
                .expect_receive(4, &[0x00, 0xFF, 0x03, 0xF6]),
        ));
        let actuator = Ax12::new(&bus, 0x03);
        assert_eq!(actuator.ident(), 0x03);
        assert_eq!(actuator.present_position().read().unwrap(), 1023);
    }

    #[test]
    fn ax12_registers_land_at_table_addresses() {
        let bus = RefCell::new(Bus::new(Script::new()));
        let actuator = Ax12::new(&bus, 0x01);
        assert_eq!(actuator.id().address(), 0x03);
        assert_eq!(actuator.cw_angle_limit().address(), 0x06);
        assert_eq!(actuator.goal_position().address(), 0x1E);
        assert_eq!(actuator.punch().address(), 0x30);
        assert_eq!(actuator.punch().id(), 0x01);
    }

    #[test]
    fn ax_s1_buzzer() {
        // Buzzer note (0x28) = 10 on ID 100
        let bus = RefCell::new(Bus::new(
            Script::new()
                .expect_send(&[0xFF, 0xFF, 0x64, 0x04, 0x03, 0x28, 0x0A, 0x62])
                .expect_receive(4, &[0xFF, 0xFF, 0x64, 0x02])
                .expect_receive(2, &[0x00, 0x99]),
        ));
        let sensor = AxS1::new(&bus, 100);
        sensor.buzzer_note().write(10).unwrap();
    }

    #[test]
    fn ax_s1_remocon_rx() {
        let bus = RefCell::new(Bus::new(
            Script::new()
                .expect_send(&[0xFF, 0xFF, 0x64, 0x04, 0x02, 0x30, 0x02, 0x63])
                .expect_receive(4, &[0xFF, 0xFF, 0x64, 0x04])
                .expect_receive(4, &[0x00, 0x34, 0x12, 0x51]),
        ));
        assert_eq!(AxS1::new(&bus, 100).remocon_rx().read().unwrap(), 0x1234);
    }

    #[test]
    fn ping() {
        let bus = RefCell::new(Bus::new(
            Script::new()
                .expect_send(&[0xFF, 0xFF, 0x01, 0x02, 0x01, 0xFB])
                .expect_receive(4, &[0xFF, 0xFF, 0x01, 0x02])
                .expect_receive(2, &[0x00, 0xFC]),
        ));
        let status = Ax12::new(&bus, 0x01).ping().unwrap();
        assert!(status.error.is_empty());
    }
}

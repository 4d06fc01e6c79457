//! 泳池 option tables.

use crate::enums::BomFamily;

use super::super::schema::CodeSchema;
use super::super::section::{CodeSection, OptionTable};

const SHELL_CODES: &[(&str, &str)] = &[
    ("1", "进口云彩白+镀锌铁支架"),
    ("2", "进口云彩黑+镀锌铁支架"),
    ("A", "进口云彩白+常规焊接铝架"),
    ("B", "进口云彩黑+常规焊接铝架"),
    ("J", "进口石膏白+镀锌铁支架"),
    ("N", "进口云彩白/无支架"),
];

const NOZZLE_CODES: &[(&str, &str)] = &[
    ("00", "无喷嘴"),
    ("1A", "眉毛水喷（标准）"),
    ("1B", "眉毛水喷+气喷（标准）"),
    ("1C", "眉毛气泡改水喷"),
    ("1F", "眉毛水喷带灯"),
    ("1H", "眉毛增加水喷"),
    ("1I", "眉毛气改水再增加水喷眉毛水喷带灯+气喷改无气水喷"),
    ("1J", "特殊配置"),
    ("1K", "趟位气泡改水喷+气喷"),
    ("1N", "额外增加水喷（不带气喷）"),
    ("1P", "眉毛气改水+河喷"),
    ("1Q", "增加泳池喷"),
    ("1S", "眉毛增加水喷（带气喷）"),
    ("1T", "眉毛水喷带灯+瀑布"),
    ("1U", "眉毛水喷带灯+气喷"),
    ("1X", "泳池简配/老款泳池简配"),
    ("1Y", "老款泳池豪配"),
    ("1Z", "眉毛水喷+3个河喷"),
    ("11", "泳池带灯标配（老款泳池豪配带灯）"),
    ("12", "泳池带灯豪配（老款泳池豪配带灯）"),
    ("2A", "猫眼水喷（标准）"),
    ("2B", "猫眼水喷+气喷（标准）"),
    ("2H", "泳池猫眼水喷+6个泳池喷"),
    ("2G", "泳池猫眼水喷+气喷+3个河喷"),
    ("2P", "猫眼气改水+河喷"),
    ("22", "猫眼标准水喷+3个河喷（瑞典配置）"),
    ("5A", "钻石标准水喷"),
    ("5B", "钻石标准水喷+气喷"),
];

const POWER_CODES: &[(&str, &str)] = &[
    ("0", "无电源标准"),
    ("A", "220-240V/50HZ"),
    ("B", "双110V/60HZ"),
    ("C", "380V/50HZ"),
];

const CONTROL_CODES: &[(&str, &str)] = &[
    ("00", "无控制器"),
    ("11", "YE-5+K1000+3KW(带热泵功能）"),
    ("13", "YE-5+K806+3.6KW（泳池区）+YJ-3+K506+3KW（户外缸区）"),
    ("15", "YJ-3+K1000+3KW（泳池区）+YE-5+K1000+3KW（户外缸区）"),
    ("16", "YJ-3+K300+4KW(1个泵）/YJ-3+K506+3KW（泳池区）+YE-5+K806+3KW（户外缸区）"),
    ("17", "YJ-3+K1000+4KW/YE-5+K1000+3.6KW（泳池区）+YJ-3+K1000+3KW（户外缸区）"),
    ("18", "YE-5+K506+3.6KW（配gecko热泵用）"),
    ("19", "YJ-2+K300+4KW(1个泵）"),
    ("1B", "YJ-2+K300+3KW（泳池区）+YJ-3+K506+3KW（户外缸区）/YJ-2+K300+3KW"),
    ("1C", "YJ-2+K506+3KW"),
    ("1G", "YJ-3+K506+3KW/YE-5+K806+3KW（泳池区）+YJ-3+K506+3KW（户外缸区）"),
    ("1H", "YE-5+K506+3KW/YE-5+K806+3.6KW（泳池区）+YE-5+K506+3KW（户外缸区）"),
    ("1I", "YE-5+K506+3.6KW/YE-5+K806+3KW（泳池区）+YE-5+K506+3KW（户外缸区）"),
    ("1J", "YE-5+K806+3KW"),
    ("1K", "YE-5+K806+3.6KW"),
    ("1L", "YE-5+K1000+3KW"),
    ("1M", "YE-5+K1000+3.6KW"),
    ("1N", "YJ-3+K300+3KW（1个泵）"),
    ("1P", "YE-5+K1000+3KW（泳池区/配2-3个泵选用）+YJ-3+K506+3KW（户外缸区/配1个泵选用）/YJ-3+K506+4KW"),
    ("1R", "YE-3+K506+3KW"),
    ("1S", "YE-3+K300+3KW(1个泵）"),
    ("2T", "BP2100 G0+TP800+3KW"),
    ("2U", "BP2100 G1+T型触摸面板+3KW"),
    ("2W", "BP2100 G1+TP800+3KW"),
    ("35", "YE-5+K1000+4KW（泳池区/配2-3个泵选用）+YJ-3+K1000+4KW（户外缸区/配1个泵选用）（美标）"),
    ("36", "YE-5+K806+4KW（泳池区/配2-3个泵选用)）+YJ-3+K506+4KW（户外缸区/配1个泵选用）（美标）"),
    ("3B", "YJ-2+K300+4KW(美标/配1个泵选用)"),
    ("3G", "YJ-3+K506+4KW(美标/配1个泵选用)"),
    ("3J", "YE-5+K806+4KW(美标/配2-3个泵选用)/YE-5+K806+4KW（泳池区/配2-3个泵选用）+YE-5+K806+4KW（户外缸区/配2-3个泵选用）(美标）"),
    ("3L", "YE-5+K1000+4KW(美标/配2-3个泵选用)"),
    ("3N", "YJ-3+K300+4KW(美标/配1个泵选用)"),
    ("3R", "YE-5+K806+4KW（泳池区/配2-3个泵选用）+YE-5+K506+4KW（户外缸区/配2-3个泵选用）(美标）"),
    ("4U", "BP2000+T型触摸面板+5.5KW（美标）"),
    ("55", "P69B133+PB565+4KW（泳池区）+P68B123+PB565+4KW（户外缸区）"),
];

const WATER_PUMP_CODES: &[(&str, &str)] = &[
    ("00", "无水泵"),
    ("11", "1个循环LX+3个2.5寸接口3HP单速泵LX+砂缸"),
    ("12", "1个gecko循环泵系统+砂缸"),
    ("1A", "1个循环泵Gecko+2个2.5寸接口3HP单速泵3LX+1个2寸接口3HP单速泵LX/1个循环泵Gecko+1个2寸接口3HP单速泵LX+游泳机680（220V）/1个循环泵Gecko+3个2.5寸接口3HP单速泵LX+1个2寸接口3HP单速泵LX/1个循环泵LX+游泳机680（220V/带无线遥控防水手表）"),
    ("1B", "1个循环泵LX+1个2寸接口3HP单速泵LX+游泳机680（220V/带无线遥控防水手表）/1个循环泵LX+游泳机680（220V/带无线遥控防水手表）+1个1HP水泵"),
    ("1C", "1个循环泵LX+游泳机680（380V/带无线遥控防水手表）+1个1HP水泵/2个循环泵Gecko+3个2.5寸接口3HP单速泵LX+2个2寸接口3HP单速泵Gecko"),
    ("1D", "1个循环泵LX+2个2.5寸接口3HP单速泵3LX+1个2寸接口3HP单速泵LX/1个循环泵LX+游泳机800（220V/带无线遥控防水手表）+1个1HP水泵"),
    ("1E", "1个循环LX+3个2.5寸接口3HP单速泵LX"),
    ("1H", "1个循环LX+3个2.5寸接口3HP单速泵LX+1个2寸接口3HP单速泵LX/1个循环泵LX+1个2寸接口3HP单速泵LX+游泳机680（220V）/2个循环泵LX+1个2寸接口3HP单速泵LX+游泳机680（220V）/2个循环LX+3个2.5寸接口3HP单速泵LX+2个2寸接口3HP单速泵LX"),
    ("1I", "1个循环泵LX+2个2.5寸接口3HP单速泵LX+1个2寸接口3HP单速泵LX/2个循环泵LX+3个2.5寸接口3HP单速泵LX+1个2寸接口3HP单速泵LX"),
    ("1J", "2个循环泵gecko+4个3HP单速泵LX"),
    ("1K", "2个循环泵gecko+4个3HP单速泵gecko"),
    ("1P", "2个循环泵LX+4个3HP单速泵LX"),
    ("1R", "1个循环泵Gecko+3个3HP单速泵Gecko/2个循环泵Gecko+5个3HP单速泵Gecko"),
    ("1S", "1个循环泵Gecko+3个2寸接口3HP单速泵LX"),
    ("1T", "1个循环LX+2个2.5寸接口3HP单速泵LX/1个循环泵LX+3个3HP单速泵LX/1个循环LX+3个2.5寸接口3HP单速泵LX/2个循环泵LX+5个3HP单速泵LX"),
    ("1U", "1个循环泵LX+3个3HP单速泵LX+1个2HP单速LX"),
    ("1Y", "1个循环泵LX+4个3HP单速泵LX"),
    ("2I", "1个2.5HP双速泵LX+2个3HP单速泵LX"),
    ("2K", "1个3HP双速泵LX+2个3HP单速泵LX"),
    ("2P", "2个3HP双速泵LX+2个3HP单速泵LX"),
    ("33", "1个循环泵LX+2个2.5寸接口3HP单速泵LX+1个2寸接口3HP单速泵Gecko（美标）/1个循环LX+3个2.5寸接口单速3HPLX+1个2寸接口单速3HPGecko（美标）/2个循环泵LX+3个2.5寸接口3HP单速泵LX+1个2寸接口3HP单速泵Gecko(美标）"),
    ("37", "1个循环LX+3个2.5寸接口4HP单速泵LX+1个2寸接口3HP单速泵Gecko（美标）"),
    ("38", "1个循环泵LX+4个3HP单速泵Gecko（美标）/2个循环泵LX+5个3HP单速泵Gecko（美标）"),
    ("3A", "1个循环泵Gecko+3个2.5寸接口3HP单速泵LX+1个2寸接口3HP单速泵LX（美标）/1个循环泵Gecko+1个2寸接口3HP单速泵LX+游泳机680（美标）/2个循环泵Gecko+3个2.5寸接口3HP单速泵LX+1个2寸接口3HP单速泵LX（美标）/2个循环泵Gecko+3个2.5寸接口3HP单速泵LX+2个2寸接口3HP单速泵LX(美标）"),
    ("3B", "1个循环泵Gecko+2个2.5寸接口3HP单速泵LX+1个2寸接口3HP单速泵LX（美标）"),
    ("3C", "1个循环泵Gecko+3个2.5寸接口4HP单速泵LX+1个2寸接口3HP单速泵Gecko（美标）/1个循环泵Gecko+3个2.5寸接口3HP单速泵LX+1个2寸接口3HP单速泵Gecko（美标）/2个循环泵Gecko+3个2.5寸接口3HP单速泵LX+2个2寸接口3HP单速泵Gecko(美标）"),
    ("3D", "1个循环泵Gecko+1个2寸接口3HP单速泵LX（美标）/1个循环LX+2个2.5寸接口4HP单速泵LX+1个2寸接口3HP单速泵LX(美标）"),
    ("3F", "1个循环LX+3个2.5寸接口4HP单速泵LX+1个2寸接口3HP单速泵LX（美标）/2个循环LX+3个2.5寸接口4HP单速泵LX+2个2寸接口3HP单速泵LX(美标）"),
    ("3H", "1个循环泵LX+3个2.5寸接口3HP单速泵LX+1个2寸接口3HP单速泵LX（美标）/2个循环LX+3个2.5寸接口3HP单速泵LX+2个2寸接口3HP单速泵LX(美标）"),
    ("3I", "1个循环泵LX+2个2.5寸接口3HP单速泵LX+1个2寸接口3HP单速泵LX（美标）/2个循环泵LX+3个2.5寸接口3HP单速泵LX+1个2寸接口3HP单速泵LX（美标）"),
    ("3J", "1个循环泵Gecko+2个2寸接口3HP单速泵LX（美标）"),
    ("3K", "1个循环泵Gecko+2个3HP单速泵Gecko（美标）"),
    ("3L", "2个循环泵Gecko+4个3HP单速泵Gecko（美标）"),
    ("3P", "2个循环泵LX+4个3HP单速泵LX（美标）"),
    ("3R", "1个循环泵Gecko+3个3HP单速泵Gecko（美标）/2个循环泵Gecko+5个3HP单速泵Gecko（美标）"),
    ("3S", "1个循环泵Gecko+3个2寸接口3HP单速泵LX（美标）/2个循环泵Gecko+5个3HP单速泵LX（美标）"),
    ("3T", "1个循环泵LX+3个3HP单速泵LX（美标）"),
    ("3U", "1个循环泵Gecko+4个3HP单速泵LX（美标）"),
    ("3V", "1个循环泵LX+3个3HP单速泵LX+1个1HP单速（美标）/2个循环泵LX+4个3HP单速泵LX+1个1HP单速（美标）"),
    ("3W", "1个循环LX+3个2.5寸接口3HP单速泵LX+1个1HP单速(美标）/2个循环LX+3个2.5寸接口3HP单速泵LX+2个2寸接口3HP单速泵LX+1个1HP单速(美标）"),
    ("3X", "1个循环泵Gecko+4个3HP单速泵Gecko（美标）"),
    ("4J", "1个3HP双速泵LX+2个3HP单速泵LX（美标）"),
    ("4K", "1个3HP双速泵Gecko+2个3HP单速泵Gecko（美标）"),
    ("4T", "1个3HP双速泵LX+3个3HP单速泵LX（美标）"),
    ("4U", "1个3HP双速泵Gecko+3个3HP单速泵Gecko（美标）/2个3HP双速泵Gecko+3个3HP单速泵Gecko（美标）"),
    ("6Y", "1个双速泵+3个单速泵管路（2.5寸管路/无泵）"),
];

const AIR_PUMP_CODES: &[(&str, &str)] = &[
    ("0", "无风泵"),
    ("A", "1个0.9HP风泵"),
    ("B", "1个0.9HP风泵+香薰"),
    ("K", "1个0.9HP加热风泵+腾龙/LVJ香薰"),
];

const SANITATION_CODES: &[(&str, &str)] = &[
    ("0", "无消毒系统"),
    ("A", "臭氧"),
    ("B", "UV"),
    ("C", "臭氧+UV"),
    ("D", "臭氧+盐氯预装管"),
    ("E", "UV+盐氯预装管"),
    ("F", "臭氧+UV+盐氯预装管"),
    ("G", "臭氧+IN.Clear"),
    ("H", "臭氧（美标）"),
    ("I", "臭氧管路（无臭氧）"),
    ("J", "IN.Clear"),
    ("K", "臭氧+ClearBlue（美标）"),
    ("L", "臭氧+IN.Clear(泳池区）+臭氧+盐氯预装管道(SPA区）"),
    ("M", "臭氧+UV（美标）"),
];

const MULTIMEDIA_CODES: &[(&str, &str)] = &[
    ("0", "无多媒体"),
    ("2", "普兰高配蓝牙+低音炮+2个共振喇叭+gecko-wifi（澳标wifi）（停用）/普兰高配蓝牙+低音炮+2个共振喇叭+2套gecko-wifi（澳标wifi）（停用）"),
    ("4", "GECKO-WIFI（澳标）"),
    ("5", "普兰高配蓝牙+低音炮+2个缸面喇叭（美标）/普兰高配蓝牙+低音炮+4个缸面喇叭（美标）"),
    ("8", "GECKO蓝牙+低音炮+2个缸面喇叭（美标）/GECKO蓝牙+低音炮+4个缸面喇叭（美标）"),
    ("A", "GECKO蓝牙+低音炮+2个缸面喇叭/GECKO蓝牙+低音炮+4个缸面喇叭/GECKO蓝牙+低音炮+4个共振喇叭（欧标/美标通用）"),
    ("B", "GECKO-WIFI/2套GECKO-WIFI"),
    ("C", "GECKO蓝牙+WIFI+低音炮+2个缸面喇叭（美标）/GECKO蓝牙+WIFI+低音炮+4个缸面喇叭（美标）/GECKO蓝牙+WIFI+低音炮+4个共振喇叭（美标）/GECKO蓝牙+2套WIFI+低音炮+4个缸面喇叭（美标）/GECKO蓝牙+2套WIFI+低音炮+4个共振喇叭"),
    ("D", "BALBOA蓝牙+低音炮+4个共振喇叭"),
    ("E", "BALBOA-WIFI/2套BALBOA-WIFI"),
    ("F", "BALBOA蓝牙+WIFI+低音炮+4个共振喇叭/BALBOA蓝牙+2套WIFI+低音炮+4个共振喇叭"),
    ("G", "普兰低配蓝牙+2个共振喇叭"),
    ("H", "普兰高配蓝牙+低音炮+2或4个缸面喇叭或2个共振喇叭（停用）"),
    ("M", "普兰高配蓝牙+低音炮+2个共振喇叭+gecko-wifi或2套gecko-wifi（停用）"),
    ("N", "普兰高配蓝牙+低音炮+2个共振喇叭+BALBOA-WIFI（停用）"),
    ("O", "Balboa蓝牙（带有源低音炮）+4个共振喇叭"),
    ("P", "GECKO-WIFI（美标）"),
    ("Q", "只带3个共振喇叭"),
    ("R", "GECKO蓝牙+WIFI+低音炮+4个共振喇叭（美标）（停用）/GECKO蓝牙+2套WIFI+低音炮+4个共振喇叭（美标）"),
    ("S", "普兰低配蓝牙+2个共振喇叭（美标）"),
    ("U", "普兰高配蓝牙+低音炮+2个共振喇叭（美标）"),
    ("V", "方形蓝牙带内置低音炮+2/4个缸面喇叭或2个共振喇叭"),
    ("W", "方形蓝牙带内置低音炮+Gecko-wifi"),
    ("X", "普兰高配蓝牙+低音炮+2个共振喇叭+gecko-wifi（美标）/2套gecko-wifi（美标）"),
    ("Y", "GECKO蓝牙+低音炮+4个共振喇叭（欧标/美标通用）"),
];

const LIGHTING_CODES: &[(&str, &str)] = &[
    ("0", "无灯光系统"),
    ("A", "水底灯"),
    ("B", "水底灯+阀带灯"),
    ("C", "水底灯+阀带灯+缸边灯"),
    ("D", "水底灯+阀带灯+缸边灯+转角灯"),
    ("E", "水底灯+阀带灯+缸边灯+光千灯"),
    ("F", "水底灯+阀带灯+缸边灯+转角灯+裙边灯"),
    ("I", "水底灯+阀带灯+裙边灯（补单用）"),
    ("J", "水底灯+阀带灯+缸边灯+3个灯杯座+转角灯+裙边灯(增加灯杯座）"),
    ("L", "水底灯+阀带灯+缸边灯+转角灯+裙边灯(无灯杯座）"),
    ("N", "水底灯+阀带灯+缸边灯（配YJ电控用）"),
    ("O", "水底灯+阀带灯+缸边灯+转角灯+裙边灯（配YJ电控用）"),
    ("U", "水底灯+阀带灯+缸边灯+转角灯+裙边灯+贝拉乔logo灯"),
    ("V", "水底灯+阀带灯+缸边灯+2个灯杯座+转角灯带+裙边灯带+贝拉乔logo灯"),
];

const BOTTOM_INSULATION_CODES: &[(&str, &str)] = &[
    ("0", "无底"),
    ("A", "单底"),
    ("B", "半三明治底"),
    ("C", "全三明治底"),
    ("E", "全三明治底支架（配镀锌支架）"),
];

const SIDE_INSULATION_CODES: &[(&str, &str)] = &[
    ("0", "无缸侧保温"),
    ("A", "四面保温板"),
    ("B", "帘子保温"),
    ("C", "电机面保温板"),
];

const BODY_INSULATION_CODES: &[(&str, &str)] = &[
    ("0", "无缸体保温"),
    ("A", "单层发泡"),
    ("B", "满泡"),
    ("D", "2cm厚发泡"),
];

const SKIRT_CODES: &[(&str, &str)] = &[
    ("0", "无裙边"),
    ("A", "灰色生态裙边"),
    ("C", "咖啡色生态裙边"),
    ("D", "灰色铝裙边"),
    ("K", "灰色铝裙边(配玻璃窗用）"),
    ("M", "灰色/铝板贴膜聚氨酯裙边（配玻璃窗用）"),
    ("N", "灰色/铝板贴膜聚氨酯裙边"),
    ("P", "棕色/铝板贴膜聚氨酯裙边"),
    ("T", "双面色/灰色+棕色/铝板贴膜聚氨酯裙边"),
    ("X", "单面色/黑橡木网纹铝板聚氨酯裙边"),
];

const CORNER_CODES: &[(&str, &str)] = &[
    ("0", "无转角"),
    ("A", "灰色生态转角/R320"),
    ("D", "灰色铝转角"),
    ("E", "咖啡色铝转角"),
    ("F", "棕色铝转角"),
    ("P", "黑橡木PS转角"),
    ("Q", "黑橡木铝转角"),
];

const GLASS_WINDOW_CODES: &[(&str, &str)] = &[
    ("0", "无玻璃窗"),
    ("A", "带玻璃窗"),
];

const STAIRS_CODES: &[(&str, &str)] = &[
    ("0", "无台阶"),
    ("B", "PS/柚木色三级台阶"),
    ("D", "咖啡色三级台阶/PS/咖啡色三级台阶"),
    ("G", "PS/灰色三级台阶"),
    ("I", "灰色台阶带扶手"),
    ("N", "PS/棕色三级台阶"),
    ("O", "PS/黑橡木色三级台阶"),
];

const COVER_CODES: &[(&str, &str)] = &[
    ("0", "无缸盖"),
    ("D", "灰色厚度100-150缸盖"),
    ("E", "灰色厚度100-150缸盖+常规缸盖支架（2个支架）"),
    ("F", "青棕色缸盖+常规缸盖支架（2个支架）"),
    ("H", "灰色厚度100-150缸盖"),
    ("I", "黑色厚度100-150缸盖"),
    ("M", "棕色厚度100-150缸盖"),
    ("N", "黑色厚度100-150缸盖带铝膜带防水织布"),
    ("Q", "灰色厚度100-150缸盖+银色缸罩"),
    ("R", "棕色厚度100-150缸盖+银色缸罩"),
    ("T", "黑色缸盖（带客户Logo）+常规缸盖支架（2个支架）"),
    ("U", "灰色厚度100-150缸盖（带客户Logo）"),
    ("V", "黑色缸盖+常规缸盖支架（2个支架）"),
    ("X", "电动卷帘盖子"),
    ("Y", "深灰色软缸盖"),
    ("Z", "黑色软缸盖"),
];

const EXTERNAL_CODES: &[(&str, &str)] = &[
    ("0", "无外接加热管路"),
    ("1", "手动进排水+贝拉乔logo灯+2米电源线"),
    ("2", "带电动进排水+贝拉乔logo灯"),
    ("A", "1套外接加热器预装管道"),
    ("B", "Balboa辅助加热器"),
    ("C", "1套外接加热器预装管道+1个不锈钢扶手"),
    ("D", "1个不锈钢扶手"),
    ("E", "带热泵预装管道/SPA和泳池区带热泵预装管道"),
    ("F", "带热泵预装管道（裙边上预留接口）/SPA区和泳池区带热泵预装管道（裙边上预留接口）"),
    ("G", "带热泵预装管（裙边上预留接口）+吊杆+划桨"),
    ("H", "吊杆"),
    ("I", "吊杆+划桨"),
    ("J", "带热泵预装管道+吊杆+划桨/SPA区和泳池区带热泵预装管道+泳池区吊杆+泳池区划桨"),
    ("K", "带热泵"),
    ("L", "带GECKO热泵（5KW）+手动进排水+2米电源线+贝拉乔logo灯"),
    ("Q", "带Gecko热泵（Mini热泵）"),
    ("X", "带热泵预装管道(裙边上预留接口)+带电动进排水+贝拉乔logo灯+2米电源线"),
    ("Y", "手动进排水+贝拉乔logo灯"),
    ("Z", "带电动进排水+贝拉乔logo灯+2米电源线"),
];

const PACKAGING_CODES: &[(&str, &str)] = &[
    ("A", "常规包装"),
    ("B", "叠装"),
    ("Z", "常规包装（瑞典）"),
];

pub(crate) fn schema() -> CodeSchema {
    CodeSchema::new(
        BomFamily::Pool,
        vec![
            CodeSection::leaf(
                "poolShell",
                "第1位（缸体颜色+支架配置）",
                1,
                OptionTable::from_static(SHELL_CODES),
            ),
            CodeSection::leaf(
                "nozzle",
                "第2+3位（喷嘴）",
                2,
                OptionTable::from_static(NOZZLE_CODES),
            ),
            CodeSection::leaf(
                "powerStandard",
                "第4位（电源标准）",
                1,
                OptionTable::from_static(POWER_CODES),
            ),
            CodeSection::leaf(
                "controlSystem",
                "第5+6位（控制系统）",
                2,
                OptionTable::from_static(CONTROL_CODES),
            ),
            CodeSection::leaf(
                "waterPump",
                "第7+8位（水泵）",
                2,
                OptionTable::from_static(WATER_PUMP_CODES),
            ),
            CodeSection::leaf(
                "airPump",
                "第9位（风泵）",
                1,
                OptionTable::from_static(AIR_PUMP_CODES),
            ),
            CodeSection::leaf(
                "sanitation",
                "第10位（消毒系统）",
                1,
                OptionTable::from_static(SANITATION_CODES),
            ),
            CodeSection::leaf(
                "multimedia",
                "第11位（多媒体）",
                1,
                OptionTable::from_static(MULTIMEDIA_CODES),
            ),
            CodeSection::leaf(
                "lighting",
                "第12位（灯光系统）",
                1,
                OptionTable::from_static(LIGHTING_CODES),
            ),
            CodeSection::leaf(
                "bottomInsulation",
                "第13位（底保温）",
                1,
                OptionTable::from_static(BOTTOM_INSULATION_CODES),
            ),
            CodeSection::leaf(
                "sideInsulation",
                "第14位（缸侧保温）",
                1,
                OptionTable::from_static(SIDE_INSULATION_CODES),
            ),
            CodeSection::leaf(
                "bodyInsulation",
                "第15位（缸体保温）",
                1,
                OptionTable::from_static(BODY_INSULATION_CODES),
            ),
            CodeSection::leaf(
                "skirt",
                "第16位（裙边）",
                1,
                OptionTable::from_static(SKIRT_CODES),
            ),
            CodeSection::leaf(
                "corner",
                "第17位（转角）",
                1,
                OptionTable::from_static(CORNER_CODES),
            ),
            CodeSection::leaf(
                "glassWindow",
                "第18位（玻璃窗）",
                1,
                OptionTable::from_static(GLASS_WINDOW_CODES),
            ),
            CodeSection::leaf(
                "stairs",
                "第19位（台阶）",
                1,
                OptionTable::from_static(STAIRS_CODES),
            ),
            CodeSection::leaf(
                "cover",
                "第20位（缸盖/缸罩）",
                1,
                OptionTable::from_static(COVER_CODES),
            ),
            CodeSection::leaf(
                "externalHeating",
                "第21位（外置加热）",
                1,
                OptionTable::from_static(EXTERNAL_CODES),
            ),
            CodeSection::leaf(
                "packaging",
                "第22位（包装）",
                1,
                OptionTable::from_static(PACKAGING_CODES),
            ),
        ],
    )
}
